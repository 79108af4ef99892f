use crate::helpers::html::escape;
use crate::models::restaurant::{Restaurant, Review, Source};

pub const NO_REVIEWS: &str = "NO REVIEWS";

/// Review form shown for catalog restaurants; the submitted review lives in memory only.
const REVIEW_FORM: &str = "<form id=\"newRatings\" class=\"review-form\">\
    <input id=\"name\" name=\"name\" placeholder=\"Your name\"/>\
    <textarea id=\"comment\" name=\"comment\"></textarea>\
    <select id=\"starRating\" name=\"rating\">\
    <option>1</option><option>2</option><option>3</option><option>4</option><option>5</option>\
    </select>\
    <button id=\"ratings-button\" type=\"submit\">Add review</button>\
    </form>";

pub fn render_detail(restaurant: &Restaurant) -> String {
    let mut html = String::new();

    if restaurant.source == Source::Local {
        if let Some(cover) = restaurant.cover_photo() {
            html.push_str(&format!("<img src=\"{}\"/>", escape(cover)));
        }
    }

    if restaurant.reviews.is_empty() {
        html.push_str(NO_REVIEWS);
    } else {
        html.push_str("<h1> Restaurant Reviews </h1>");
        for review in &restaurant.reviews {
            html.push_str(&render_review(review));
        }
    }

    if restaurant.source == Source::Local {
        html.push_str(REVIEW_FORM);
    }

    html
}

fn render_review(review: &Review) -> String {
    format!(
        "<div class=\"review\"><div>NAME: {}</div>\
         <div>COMMENT:<em>{}</em> </div>\
         <div>RATING: {} star(s)</div></div>",
        escape(&review.name),
        escape(&review.comment),
        review.rating,
    )
}

/// Plain-text summary used for the blocking alert on sidebar clicks.
pub fn render_alert_summary(restaurant: &Restaurant) -> String {
    if restaurant.reviews.is_empty() {
        return NO_REVIEWS.to_string();
    }

    restaurant
        .reviews
        .iter()
        .map(|review| {
            format!(
                "NAME: {},\nCOMMENT: {},\nRATING: {} Stars\n\n",
                review.name, review.comment, review.rating
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::local_record::LocalPhoto;
    use crate::models::restaurant::RawRecord;
    use crate::services::fixtures::{local_record, nearby_place, review};

    fn local_with_photo() -> Restaurant {
        let mut record = local_record("l-1", 0.0, 0.0, 4.0);
        record.photos = vec![LocalPhoto { streetview_url: "https://img/cover.jpg".to_string() }];
        Restaurant::from_raw(RawRecord::Local(record)).unwrap()
    }

    #[test]
    fn local_detail_has_cover_and_review_form() {
        let html = render_detail(&local_with_photo());

        assert!(html.starts_with("<img src=\"https://img/cover.jpg\"/>"));
        assert!(html.contains(NO_REVIEWS));
        assert!(html.contains("id=\"ratings-button\""));
    }

    #[test]
    fn external_detail_lists_reviews_without_form() {
        let mut restaurant =
            Restaurant::from_raw(RawRecord::External(nearby_place("g-1", 0.0, 0.0, 4.0))).unwrap();
        restaurant.append_reviews(vec![review("Kim", 5.0), review("Lee", 3.0)]);

        let html = render_detail(&restaurant);

        assert!(html.contains("NAME: Kim"));
        assert!(html.contains("RATING: 3 star(s)"));
        assert!(!html.contains(NO_REVIEWS));
        assert!(!html.contains("<img"));
        assert!(!html.contains("ratings-button"));
    }

    #[test]
    fn alert_summary_lists_each_review() {
        let mut restaurant = local_with_photo();
        assert_eq!(render_alert_summary(&restaurant), NO_REVIEWS);

        restaurant.append_reviews(vec![review("Kim", 5.0)]);

        assert_eq!(
            render_alert_summary(&restaurant),
            "NAME: Kim,\nCOMMENT: Kim says hi,\nRATING: 5 Stars\n\n"
        );
    }
}
