use crate::commands::CmdResult;
use crate::config::FolioConfig;
use crate::error::{FolioError, Result};
use log::debug;

/// Header state at `offset` pixels, using the configured scroll threshold.
pub fn run(config: &FolioConfig, offset: f64) -> Result<CmdResult> {
    if !offset.is_finite() {
        return Err(FolioError::Api(format!(
            "Scroll offset must be a number of pixels, got {}",
            offset
        )));
    }

    let spy = config.scroll_spy();
    debug!("Header threshold {}px, offset {}px", spy.threshold(), offset);
    Ok(CmdResult::default().with_header(spy.header_at(offset)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::scroll::HEADER_MINI_CLASS;

    #[test]
    fn uses_configured_threshold() {
        let mut config = FolioConfig::default();
        assert!(run(&config, 60.0).unwrap().header.unwrap().compact);

        config.set("scroll-threshold", "120").unwrap();
        let header = run(&config, 60.0).unwrap().header.unwrap();
        assert!(!header.compact);
        assert_eq!(header.threshold, 120);
        assert!(!header.header.contains(HEADER_MINI_CLASS));
    }

    #[test]
    fn negative_offset_is_full_size() {
        let header = run(&FolioConfig::default(), -30.0).unwrap().header.unwrap();
        assert!(!header.compact);
    }

    #[test]
    fn non_finite_offset_is_rejected() {
        assert!(run(&FolioConfig::default(), f64::NAN).is_err());
        assert!(run(&FolioConfig::default(), f64::INFINITY).is_err());
    }
}
