//! Askama templates for the web frontend.

use askama::Template;

/// API index page: what the service does and how to call it.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Assumed vehicle range in miles
    pub max_range_miles: f64,

    /// Assumed fuel economy in miles per gallon
    pub mpg: f64,

    /// Number of stations in the loaded catalog
    pub station_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_renders_assumptions() {
        let html = IndexTemplate {
            max_range_miles: 500.0,
            mpg: 10.0,
            station_count: 1234,
        }
        .render()
        .unwrap();

        assert!(html.contains("500"));
        assert!(html.contains("10"));
        assert!(html.contains("1234"));
        assert!(html.contains("/api/route"));
    }
}
