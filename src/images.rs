//! Broken-image detection.

/// Whether an image already gave up loading before its `error` listener was
/// attached. The browser marks such an image complete with no intrinsic
/// width. An image without a source is left alone.
pub fn failed_before_watch(complete: bool, natural_width: u32, src: &str) -> bool {
    complete && natural_width == 0 && !src.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settled_image_without_width_is_broken() {
        assert!(failed_before_watch(true, 0, "https://example.com/logo.png"));
    }

    #[test]
    fn loaded_loading_or_sourceless_images_are_not() {
        assert!(!failed_before_watch(true, 640, "https://example.com/logo.png"));
        assert!(!failed_before_watch(false, 0, "https://example.com/logo.png"));
        assert!(!failed_before_watch(true, 0, ""));
    }
}
