// Accessibility helpers

pub const STATUS_REGION_ID: &str = "status-live";

/// CSS for visible focus rings and the screen-reader-only utility class.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #D4A24C;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Announce a message through the polite live region, if mounted.
pub fn set_status(msg: &str) {
    if let Some(node) =
        crate::dom::document().and_then(|doc| doc.get_element_by_id(STATUS_REGION_ID))
    {
        node.set_text_content(Some(msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_css_includes_sr_only_helper() {
        assert!(visible_focus_css().contains(".sr-only"));
        set_status("noop outside a browser");
    }
}
