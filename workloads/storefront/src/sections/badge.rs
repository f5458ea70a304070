//! Cart badge renderer.

use serde::Serialize;

/// The item counter shown on the cart icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    /// Total number of units in the cart.
    pub count: i64,
    /// Whether the badge is shown at all.
    pub visible: bool,
}

impl Badge {
    /// Badge for a cart holding `count` units. Hidden when empty.
    pub fn for_count(count: i64) -> Self {
        Self {
            count,
            visible: count > 0,
        }
    }
}

/// Render the cart badge.
pub fn render_badge(badge: &Badge) -> String {
    let display = if badge.visible { "block" } else { "none" };
    format!(
        r#"<span class="cart-badge" id="cartBadge" style="display: {display}">{count}</span>"#,
        count = badge.count
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_hidden_when_empty() {
        let badge = Badge::for_count(0);
        assert!(!badge.visible);
        assert!(render_badge(&badge).contains("display: none"));
    }

    #[test]
    fn test_badge_shows_count() {
        let html = render_badge(&Badge::for_count(3));
        assert!(html.contains("display: block"));
        assert!(html.contains(">3</span>"));
    }
}
