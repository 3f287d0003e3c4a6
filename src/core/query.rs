use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use crate::domain::model::{Reservation, SportType};

/// Inclusive calendar-day window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// The 7-day window containing `date`, starting on `week_start`. The
    /// first weekday is a caller decision (see `Settings::week_start`).
    pub fn week_of(date: NaiveDate, week_start: Weekday) -> Self {
        let offset = date.weekday().days_since(week_start);
        let start = date - Days::new(u64::from(offset));
        Self {
            start,
            end: start + Days::new(6),
        }
    }

    /// First through last day of `date`'s month.
    pub fn month_of(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(date);
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Filter over the collection, mirroring the calendar's day/week/month views
/// plus free-text search. Every set field must match; `date` wins over
/// `date_range` when both are set.
#[derive(Debug, Clone, Default)]
pub struct ReservationQuery {
    pub date: Option<NaiveDate>,
    pub date_range: Option<DateRange>,
    pub sport_type: Option<SportType>,
    pub search_text: Option<String>,
}

impl ReservationQuery {
    pub fn matches(&self, reservation: &Reservation) -> bool {
        if let Some(date) = self.date {
            if reservation.date != date {
                return false;
            }
        } else if let Some(range) = self.date_range {
            if !range.contains(reservation.date) {
                return false;
            }
        }

        if let Some(sport) = &self.sport_type {
            if &reservation.sport_type != sport {
                return false;
            }
        }

        if let Some(needle) = &self.search_text {
            let needle = needle.to_lowercase();
            let hit = reservation.name.to_lowercase().contains(&needle)
                || reservation.phone.to_lowercase().contains(&needle)
                || reservation.sport_type.label().to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn reservation(name: &str, sport: SportType, date: &str, start: &str) -> Reservation {
        Reservation {
            id: format!("id-{}", name),
            name: name.to_string(),
            phone: "555-0101".to_string(),
            sport_type: sport,
            date: day(date),
            start_time: start.parse().unwrap(),
            end_time: "22:00".parse().unwrap(),
        }
    }

    #[test]
    fn test_week_of_monday_start() {
        // 2024-06-05 is a Wednesday
        let range = DateRange::week_of(day("2024-06-05"), Weekday::Mon);
        assert_eq!(range.start, day("2024-06-03"));
        assert_eq!(range.end, day("2024-06-09"));
        assert!(range.contains(day("2024-06-03")));
        assert!(range.contains(day("2024-06-09")));
        assert!(!range.contains(day("2024-06-10")));
    }

    #[test]
    fn test_week_of_sunday_start() {
        let range = DateRange::week_of(day("2024-06-05"), Weekday::Sun);
        assert_eq!(range.start, day("2024-06-02"));
        assert_eq!(range.end, day("2024-06-08"));
    }

    #[test]
    fn test_week_of_anchor_on_week_start() {
        let range = DateRange::week_of(day("2024-06-03"), Weekday::Mon);
        assert_eq!(range.start, day("2024-06-03"));
    }

    #[test]
    fn test_month_of() {
        let june = DateRange::month_of(day("2024-06-15"));
        assert_eq!(june.start, day("2024-06-01"));
        assert_eq!(june.end, day("2024-06-30"));

        // leap February
        let feb = DateRange::month_of(day("2024-02-10"));
        assert_eq!(feb.end, day("2024-02-29"));

        // year rollover
        let dec = DateRange::month_of(day("2023-12-31"));
        assert_eq!(dec.start, day("2023-12-01"));
        assert_eq!(dec.end, day("2023-12-31"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let query = ReservationQuery::default();
        assert!(query.matches(&reservation("Ana", SportType::Football, "2024-06-03", "09:00")));
    }

    #[test]
    fn test_exact_date_wins_over_range() {
        let query = ReservationQuery {
            date: Some(day("2024-06-03")),
            date_range: Some(DateRange {
                start: day("2024-06-10"),
                end: day("2024-06-16"),
            }),
            ..Default::default()
        };

        assert!(query.matches(&reservation("Ana", SportType::Football, "2024-06-03", "09:00")));
        assert!(!query.matches(&reservation("Ana", SportType::Football, "2024-06-12", "09:00")));
    }

    #[test]
    fn test_sport_filter() {
        let query = ReservationQuery {
            sport_type: Some(SportType::Volleyball),
            ..Default::default()
        };

        assert!(query.matches(&reservation("Ana", SportType::Volleyball, "2024-06-03", "09:00")));
        assert!(!query.matches(&reservation("Ana", SportType::Football, "2024-06-03", "09:00")));
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_phone_and_label() {
        let res = reservation("Ana", SportType::Volleyball, "2024-06-03", "09:00");

        for needle in ["ana", "ANA", "555-01", "volley", "Volleyball"] {
            let query = ReservationQuery {
                search_text: Some(needle.to_string()),
                ..Default::default()
            };
            assert!(query.matches(&res), "expected '{}' to match", needle);
        }

        let miss = ReservationQuery {
            search_text: Some("luis".to_string()),
            ..Default::default()
        };
        assert!(!miss.matches(&res));
    }

    #[test]
    fn test_filters_are_anded() {
        let query = ReservationQuery {
            date: Some(day("2024-06-03")),
            sport_type: Some(SportType::Football),
            search_text: Some("ana".to_string()),
            ..Default::default()
        };

        assert!(query.matches(&reservation("Ana", SportType::Football, "2024-06-03", "09:00")));
        // right day and sport, wrong text
        assert!(!query.matches(&reservation("Luis", SportType::Football, "2024-06-03", "09:00")));
        // right day and text, wrong sport
        assert!(!query.matches(&reservation("Ana", SportType::Tennis, "2024-06-03", "09:00")));
    }
}
