use clap::Parser;

#[derive(Parser, Clone, Debug)]
pub struct Config {
    #[clap(env, long, default_value = "local")]
    pub environment: String,
    #[clap(env, long, default_value_t = 3000)]
    pub port: u16,
    /// Comma separated list of origins allowed by CORS.
    #[clap(env, long, default_value = "http://localhost:8080")]
    pub origin_urls: String,
    /// File path or http(s) URL of the bundled restaurants file.
    #[clap(env, long, default_value = "data/restaurants.json")]
    pub catalog_location: String,
    #[clap(env, long)]
    pub google_api_key: String,
    #[clap(env, long, default_value = "https://maps.googleapis.com/maps/api/place")]
    pub places_base_url: String,
    #[clap(env, long, default_value_t = 2500)]
    pub search_radius_meters: u32,
    #[clap(env, long, default_value = "restaurant")]
    pub search_keyword: String,
}
