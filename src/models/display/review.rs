//! Review display model

use tabled::Tabled;

use super::{Describe, Row};
use crate::client::models::Review;
use crate::output::formatters::{
    format_date, format_datetime, format_stars, or_na, truncate_string,
};

/// Longest comment shown in a table cell
const COMMENT_WIDTH: usize = 40;

/// Review display model for table output.
#[derive(Debug, Clone, Tabled)]
pub struct ReviewDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "RATING")]
    pub rating: String,

    #[tabled(rename = "CUSTOMER")]
    pub customer: String,

    #[tabled(rename = "BARBER")]
    pub barber: String,

    #[tabled(rename = "COMMENT")]
    pub comment: String,

    #[tabled(rename = "DATE")]
    pub date: String,
}

impl From<&Review> for ReviewDisplay {
    fn from(review: &Review) -> Self {
        let appointment = review.appointment.as_ref();
        let comment = if review.has_comment() {
            truncate_string(review.comment.as_deref().unwrap_or_default().trim(), COMMENT_WIDTH)
        } else {
            "-".to_string()
        };

        Self {
            id: review.id.to_string(),
            rating: review.rating.map(format_stars).unwrap_or_else(|| or_na(None)),
            customer: or_na(appointment.and_then(|a| a.customer_name.as_deref())),
            barber: or_na(appointment.and_then(|a| a.barber.as_deref())),
            comment,
            date: format_date(review.created_at.as_deref()),
        }
    }
}

impl Row for Review {
    type Display = ReviewDisplay;

    fn row(&self) -> ReviewDisplay {
        ReviewDisplay::from(self)
    }
}

impl Describe for Review {
    fn describe(&self) -> Vec<(&'static str, String)> {
        let appointment = self.appointment.as_ref();
        vec![
            ("ID", self.id.to_string()),
            (
                "Rating",
                self.rating
                    .map(|r| format!("{} ({}/5)", format_stars(r), r))
                    .unwrap_or_else(|| or_na(None)),
            ),
            ("Comment", or_na(self.comment.as_deref())),
            (
                "Appointment",
                appointment
                    .map(|a| a.id.to_string())
                    .unwrap_or_else(|| or_na(None)),
            ),
            ("Customer", or_na(appointment.and_then(|a| a.customer_name.as_deref()))),
            ("Barber", or_na(appointment.and_then(|a| a.barber.as_deref()))),
            ("Created", format_datetime(self.created_at.as_deref())),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_review_display() {
        let review: Review = serde_json::from_value(json!({
            "id": 9,
            "nota": 4,
            "comentario": "Muito bom",
            "criadoEm": "2025-03-14T12:00:00Z",
            "agendamento": {"id": 1, "nome": "Carlos", "profissional": "João"}
        }))
        .unwrap();

        let display = review.row();

        assert_eq!(display.rating, "★★★★☆");
        assert_eq!(display.customer, "Carlos");
        assert_eq!(display.barber, "João");
        assert_eq!(display.comment, "Muito bom");
        assert_eq!(display.date, "14/03/2025");
    }

    #[test]
    fn test_review_without_comment() {
        let review: Review =
            serde_json::from_value(json!({"id": 1, "nota": 2, "comentario": " "})).unwrap();
        let display = ReviewDisplay::from(&review);

        assert_eq!(display.comment, "-");
        assert_eq!(display.customer, "N/A");
    }

    #[test]
    fn test_unrated_review() {
        let review: Review = serde_json::from_value(json!({"id": 5, "nota": null})).unwrap();
        assert_eq!(review.row().rating, "N/A");
    }
}
