use crate::domain::model::PageRequest;

/// Builds the upstream query URL for one page. Parameter names and order
/// are part of the wire contract and must not change.
pub fn grants_link(base_url: &str, request: &PageRequest) -> String {
    format!(
        "{}?grantFromDate={}&grantToDate={}&start={}&rows={}&largeTextSearchFlag=N",
        base_url,
        request.range.from_date,
        request.range.to_date,
        request.offset,
        request.page_size,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::DateRange;
    use chrono::NaiveDate;

    fn range(from: &str, to: &str) -> DateRange {
        DateRange {
            from_date: NaiveDate::parse_from_str(from, "%Y-%m-%d").unwrap(),
            to_date: NaiveDate::parse_from_str(to, "%Y-%m-%d").unwrap(),
        }
    }

    #[test]
    fn test_grants_link_exact_format() {
        let request = PageRequest {
            offset: 0,
            page_size: 100,
            range: range("2017-01-01", "2017-01-03"),
        };
        let link = grants_link(
            "https://developer.uspto.gov/ibd-api/v1/application/grants",
            &request,
        );
        assert_eq!(
            link,
            "https://developer.uspto.gov/ibd-api/v1/application/grants?grantFromDate=2017-01-01&grantToDate=2017-01-03&start=0&rows=100&largeTextSearchFlag=N"
        );
    }

    #[test]
    fn test_grants_link_embeds_offset_and_rows() {
        let request = PageRequest {
            offset: 300,
            page_size: 50,
            range: range("2020-06-01", "2020-06-30"),
        };
        let link = grants_link("http://localhost:1234/grants", &request);
        assert!(link.contains("start=300"));
        assert!(link.contains("rows=50"));
        assert!(link.ends_with("largeTextSearchFlag=N"));
    }
}
