//! The herokuapp dynamic-content page
//!
//! Every load of this page regenerates the text of its content rows, which
//! is what the reload-comparison workflow depends on.

use uiprobe_screenplay::{AllText, Navigate, Target, Text};

use crate::site::Site;

pub struct DynamicContentPage;

impl DynamicContentPage {
    fn content_rows() -> Target {
        Target::css("dynamic text elements", ".large-10")
    }

    pub fn open(site: &Site) -> Navigate {
        Navigate::to(site.dynamic_content_url())
    }

    /// Texts of all content rows in document order.
    pub fn dynamic_text() -> AllText {
        Text::of_all(Self::content_rows())
    }
}
