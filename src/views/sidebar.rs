use crate::helpers::html::escape;
use crate::models::filter::RatingFilter;
use crate::models::restaurant::Restaurant;
use crate::repositories::restaurant_store::RestaurantStore;

pub const EMPTY_STATE: &str = "<p> <strong> NOTHING TO DISPLAY </strong></p>";

/// Sidebar list for the active filter, or the empty-state when nothing matches.
pub fn render_sidebar(
    store: &RestaurantStore,
    filter: RatingFilter,
) -> String {
    let items: Vec<String> = store
        .iter()
        .filter(|restaurant| filter.matches(restaurant.average_rating))
        .map(render_list_item)
        .collect();

    if items.is_empty() {
        return EMPTY_STATE.to_string();
    }
    items.concat()
}

pub fn render_list_item(restaurant: &Restaurant) -> String {
    format!(
        "<li data-place-id=\"{}\"><section class=\"restaurant-details\">\
         <h3 class=\"restaurant-name\">{}</h3>\
         <p class=\"restaurant-rating\">{} Stars</p>\
         <p class=\"restaurant-address\">{}</p>\
         </section></li>",
        escape(&restaurant.place_id),
        escape(&restaurant.name),
        restaurant.average_rating,
        escape(&restaurant.address),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::restaurant::RawRecord;
    use crate::services::fixtures::local_record;

    fn store_with_ratings(ratings: &[f64]) -> RestaurantStore {
        let restaurants = ratings
            .iter()
            .enumerate()
            .map(|(i, rating)| {
                let record = local_record(&format!("r-{}", i), 0.0, 0.0, *rating);
                Restaurant::from_raw(RawRecord::Local(record)).unwrap()
            })
            .collect();
        RestaurantStore::from_merged(1, restaurants)
    }

    #[test]
    fn renders_only_matching_restaurants() {
        let store = store_with_ratings(&[0.0, 1.2, 3.0, 4.9, 5.0]);

        let html = render_sidebar(&store, RatingFilter::AtLeast(3));

        assert_eq!(html.matches("<li ").count(), 3);
        assert!(html.contains("3 Stars"));
        assert!(html.contains("4.9 Stars"));
        assert!(html.contains("5 Stars"));
        assert!(!html.contains("1.2 Stars"));
    }

    #[test]
    fn five_stars_without_matches_shows_empty_state() {
        let store = store_with_ratings(&[0.0, 1.2, 3.0, 4.9]);

        assert_eq!(render_sidebar(&store, RatingFilter::FiveStars), EMPTY_STATE);
    }

    #[test]
    fn list_item_is_escaped_and_tagged_with_id() {
        let mut record = local_record("x", 0.0, 0.0, 4.0);
        record.restaurant_name = "<script>alert(1)</script>".to_string();
        let restaurant = Restaurant::from_raw(RawRecord::Local(record)).unwrap();

        let html = render_list_item(&restaurant);

        assert!(html.starts_with("<li data-place-id=\"x\">"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
