use log::{debug, warn};
use scraper::Html;
use serde_json::Value;

use super::{ScrapeError, selector};

/// Parses the `props` attribute of the page's first `<astro-island>`.
///
/// Returns `Ok(None)` when there is no island or its props are absent or blank.
pub fn parse_props(html: &str) -> Result<Option<Value>, ScrapeError> {
    let document = Html::parse_document(html);
    let Some(island) = document.select(&selector("astro-island")?).next() else {
        warn!("No astro-island element on page");
        return Ok(None);
    };

    let Some(props) = island.value().attr("props").filter(|p| !p.trim().is_empty()) else {
        warn!("astro-island has no usable props");
        return Ok(None);
    };
    debug!("astro-island props: {} bytes", props.len());

    serde_json::from_str(props).map(Some).map_err(ScrapeError::Json)
}
