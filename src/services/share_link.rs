use crate::domain::{
    parse_week, parse_year, FormulaField, FormulaParams, SeasonType, ViewFilters, DEFAULT_YEAR,
};
use std::collections::HashMap;
use tracing::debug;
use url::{form_urlencoded, Url};

/// Filters and weights carried by a share link.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SharedView {
    pub filters: ViewFilters,
    pub params: FormulaParams,
}

impl SharedView {
    pub fn new(filters: ViewFilters, params: FormulaParams) -> Self {
        Self { filters, params }
    }
}

/// `year=..&[week=..&]season_type=..&wl=..&os=..&ts=..&ths=..&sos=..`
pub fn encode(view: &SharedView) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer.append_pair("year", &view.filters.year.to_string());
    if let Some(week) = view.filters.week {
        serializer.append_pair("week", &week.to_string());
    }
    serializer.append_pair("season_type", view.filters.season_type.as_str());
    for (field, value) in view.params.fields() {
        serializer.append_pair(field.share_key(), &value.to_string());
    }
    serializer.finish()
}

/// `base` with its query replaced by the encoded view.
pub fn share_url(base: &Url, view: &SharedView) -> Url {
    let mut url = base.clone();
    url.set_query(Some(&encode(view)));
    url
}

/// Reads a share link. Accepts a full URL, `?query` or a bare query string.
/// Missing or unparseable values fall back to defaults; this never fails.
pub fn decode(input: &str) -> SharedView {
    let query = query_part(input);
    let mut values: HashMap<String, String> = HashMap::new();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        values.entry(key.into_owned()).or_insert_with(|| value.into_owned());
    }

    let year = match values.get("year") {
        Some(raw) => parse_year(raw).unwrap_or_else(|| {
            debug!("Ignoring invalid year '{raw}' in share link");
            DEFAULT_YEAR
        }),
        None => DEFAULT_YEAR,
    };
    let week = values.get("week").and_then(|raw| parse_week(raw));
    let season_type = values
        .get("season_type")
        .and_then(|raw| raw.parse::<SeasonType>().ok())
        .unwrap_or_default();

    let params = if values.contains_key(FormulaField::WinLoss.share_key()) {
        decode_params(&values)
    } else {
        FormulaParams::default()
    };

    SharedView {
        filters: ViewFilters {
            year,
            week,
            season_type,
        },
        params,
    }
}

fn decode_params(values: &HashMap<String, String>) -> FormulaParams {
    let mut params = FormulaParams::default();
    for field in FormulaField::ALL {
        let parsed = values
            .get(field.share_key())
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|value| value.is_finite());
        match parsed {
            Some(value) => params.set(field, value),
            None => debug!(
                "Share link weight '{}' missing or invalid, using default",
                field.share_key()
            ),
        }
    }
    params
}

fn query_part(input: &str) -> String {
    let input = input.trim();
    if input.contains("://") {
        if let Ok(url) = Url::parse(input) {
            return url.query().unwrap_or_default().to_string();
        }
    }
    input.trim_start_matches('?').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Preset;

    fn round_trip(view: SharedView) {
        assert_eq!(decode(&encode(&view)), view);
    }

    #[test]
    fn round_trips_defaults_with_all_weeks() {
        let view = SharedView::default();
        assert_eq!(
            encode(&view),
            "year=2025&season_type=regular&wl=1&os=1&ts=1.3&ths=1.5&sos=1"
        );
        round_trip(view);
    }

    #[test]
    fn round_trips_blowout_in_week_seven() {
        round_trip(SharedView::new(
            ViewFilters {
                year: 2024,
                week: Some(7),
                season_type: SeasonType::Both,
            },
            Preset::Blowout.params(),
        ));
    }

    #[test]
    fn round_trips_two_decimal_weights() {
        let values = [0.01, 0.35, 1.07, 2.99, 12.45, 0.0, 3.1];
        for (i, window) in values.windows(5).enumerate() {
            let params = FormulaParams {
                win_loss_multiplier: window[0],
                one_score_multiplier: window[1],
                two_score_multiplier: window[2],
                three_score_multiplier: window[3],
                strength_of_schedule_multiplier: window[4],
            };
            let filters = ViewFilters {
                year: 2010 + i as u16,
                week: Some(1 + i as u8),
                season_type: SeasonType::Regular,
            };
            round_trip(SharedView::new(filters, params));
        }
    }

    #[test]
    fn week_fifteen_survives_and_sixteen_does_not() {
        let mut view = SharedView::default();
        view.filters.week = Some(15);
        round_trip(view);

        let decoded = decode("year=2024&week=16&season_type=regular");
        assert_eq!(decoded.filters.week, None);
    }

    #[test]
    fn missing_wl_ignores_other_weights() {
        let decoded = decode("year=2022&os=9&ts=9&ths=9&sos=9");
        assert_eq!(decoded.params, FormulaParams::default());
        assert_eq!(decoded.filters.year, 2022);
    }

    #[test]
    fn wl_present_fills_missing_weights_with_defaults() {
        let decoded = decode("?wl=2.5&ths=0.75");
        assert_eq!(
            decoded.params,
            FormulaParams {
                win_loss_multiplier: 2.5,
                three_score_multiplier: 0.75,
                ..FormulaParams::default()
            }
        );
    }

    #[test]
    fn invalid_values_fall_back() {
        let decoded = decode("year=twenty&week=abc&season_type=postseason&wl=NaN&os=inf&ts=x");
        assert_eq!(decoded, SharedView::default());
    }

    #[test]
    fn accepts_full_urls() {
        let decoded =
            decode("https://rankings.example.com/?year=2021&week=3&season_type=both&wl=1.5");
        assert_eq!(decoded.filters.year, 2021);
        assert_eq!(decoded.filters.week, Some(3));
        assert_eq!(decoded.filters.season_type, SeasonType::Both);
        assert_eq!(decoded.params.win_loss_multiplier, 1.5);
        assert_eq!(decoded.params.two_score_multiplier, 1.3);
    }

    #[test]
    fn first_duplicate_key_wins() {
        assert_eq!(decode("year=2019&year=2020").filters.year, 2019);
    }

    #[test]
    fn empty_input_is_all_defaults() {
        assert_eq!(decode(""), SharedView::default());
        assert_eq!(decode("?"), SharedView::default());
    }

    #[test]
    fn share_url_replaces_existing_query() {
        let base = Url::parse("http://localhost:8000/?stale=1").unwrap();
        let url = share_url(&base, &SharedView::default());
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/?year=2025&season_type=regular&wl=1&os=1&ts=1.3&ths=1.5&sos=1"
        );
    }
}
