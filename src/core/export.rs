use crate::domain::model::Reservation;
use crate::utils::error::Result;

/// Renders reservations as CSV, one row per record in the order given. A
/// pure function over `list_all` output; the store contract is untouched.
pub fn to_csv(records: &[Reservation]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SportType;

    #[test]
    fn test_to_csv_header_and_rows() {
        let records = vec![
            Reservation {
                id: "r1".to_string(),
                name: "Ana".to_string(),
                phone: "555".to_string(),
                sport_type: SportType::Football,
                date: "2024-06-03".parse().unwrap(),
                start_time: "09:00".parse().unwrap(),
                end_time: "10:00".parse().unwrap(),
            },
            Reservation {
                id: "r2".to_string(),
                name: "Luis".to_string(),
                phone: "556".to_string(),
                sport_type: SportType::Other("padel".to_string()),
                date: "2024-06-04".parse().unwrap(),
                start_time: "10:00".parse().unwrap(),
                end_time: "11:00".parse().unwrap(),
            },
        ];

        let csv = to_csv(&records).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "id,name,phone,sportType,date,startTime,endTime");
        assert_eq!(lines[1], "r1,Ana,555,football,2024-06-03,09:00,10:00");
        assert_eq!(lines[2], "r2,Luis,556,padel,2024-06-04,10:00,11:00");
    }

    #[test]
    fn test_to_csv_empty_collection() {
        assert_eq!(to_csv(&[]).unwrap(), "");
    }
}
