//! Projection contract between the session and whatever draws the cart.

use shared::CartView;

/// Receives a fresh view after every committed mutation
pub trait CartRenderer {
    fn render(&mut self, view: &CartView);
}

/// Any `FnMut(&CartView)` closure is a renderer
impl<F> CartRenderer for F
where
    F: FnMut(&CartView),
{
    fn render(&mut self, view: &CartView) {
        self(view)
    }
}

/// Plain-text projection for terminals and logs
#[derive(Debug, Default)]
pub struct TextRenderer {
    last: String,
    renders: usize,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the most recent render
    pub fn last(&self) -> &str {
        &self.last
    }

    pub fn render_count(&self) -> usize {
        self.renders
    }

    pub fn to_text(view: &CartView) -> String {
        let mut out = format!("Cart ({})\n", view.item_count);
        if view.is_empty {
            out.push_str("  Your cart is empty.\n");
        }
        for line in &view.lines {
            out.push_str(&format!("  {} [{}]\n    {}  {}\n", line.name, line.id, line.meta, line.line_total));
        }
        out.push_str(&format!("Subtotal: {}\n", view.subtotal));
        match &view.discount_code {
            Some(code) => out.push_str(&format!("Discount ({}): {}\n", code, view.discount)),
            None => out.push_str(&format!("Discount: {}\n", view.discount)),
        }
        out.push_str(&format!("Total: {}\n", view.total));
        out
    }
}

impl CartRenderer for TextRenderer {
    fn render(&mut self, view: &CartView) {
        self.last = Self::to_text(view);
        self.renders += 1;
    }
}
