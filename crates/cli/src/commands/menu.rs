//! Menu pager command.
//!
//! # Usage
//!
//! ```bash
//! # Which items of a 35-item category are visible after two sentinel hits?
//! menulink menu page --total 35 --scrolls 2
//! ```

use std::io::Write;

use menulink_cart::MenuPager;

use crate::error::Result;

/// Simulate `scrolls` sentinel hits on a category of `total` items.
pub fn page(total: usize, page_size: usize, scrolls: usize, out: &mut impl Write) -> Result<()> {
    let mut pager = MenuPager::new(total, page_size);
    for _ in 0..scrolls {
        if !pager.on_sentinel_visible() {
            break;
        }
    }

    let range = pager.visible_range();
    writeln!(
        out,
        "page {}: showing items {}..{} of {}{}",
        pager.page(),
        range.start,
        range.end,
        total,
        if pager.has_more() { "" } else { " (all loaded)" }
    )?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn render(total: usize, page_size: usize, scrolls: usize) -> String {
        let mut out = Vec::new();
        page(total, page_size, scrolls, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_initial_page() {
        assert_eq!(render(35, 10, 0), "page 1: showing items 0..10 of 35\n");
    }

    #[test]
    fn test_scrolls_stop_when_exhausted() {
        assert_eq!(render(35, 10, 2), "page 3: showing items 0..30 of 35\n");
        assert_eq!(
            render(35, 10, 9),
            "page 4: showing items 0..35 of 35 (all loaded)\n"
        );
    }
}
