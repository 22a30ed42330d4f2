//! Star rating example driving the widget without a window.
//!
//! Run with: cargo run -p horizon-rating --example star_rating
//!
//! Set `RUST_LOG=horizon_rating=trace` to watch the engine work.

use std::sync::Arc;

use horizon_rating::prelude::*;
use horizon_rating::{Result, binding};
use tracing_subscriber::EnvFilter;

const ATTRIBUTES: &str = r#"
starCount = 5
starProgress = 1.5
starMinProgress = 1
starSize = 24
starSpace = 8
starStepFull = false
starEmpty = "☆"
starHalf = "⯪"
starFill = "★"
"#;

/// Renders icons as characters into a text line.
#[derive(Default)]
struct TextPainter {
    line: String,
}

impl IconPainter<char> for TextPainter {
    fn draw_icon(&mut self, _index: usize, _rect: Rect, drawable: Option<&char>) {
        self.line.push(drawable.copied().unwrap_or('?'));
        self.line.push(' ');
    }
}

fn render(view: &StarRatingView<char>) -> String {
    let mut painter = TextPainter::default();
    view.paint(&mut painter);
    painter.line
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let attrs = RatingAttributes::from_toml_str(ATTRIBUTES)?;
    let mut view = StarRatingView::from_attributes(&attrs, |name| name.chars().next());

    let size = view.size_hint();
    println!("row is {}x{}", size.width, size.height);
    println!("initial   {:>4}  {}", view.progress(), render(&view));

    binding::set_value_changed_listener(
        &mut view,
        Some(Arc::new(|progress: f32| tracing::info!(progress, "rating changed"))),
        None,
    );

    // Drag from the left edge to the end of the fourth icon.
    let mut x = 0.0;
    view.handle_pointer(&mut PointerEvent::down(x));
    println!("down {x:>4}  {:>4}  {}", view.progress(), render(&view));
    while x < 128.0 {
        x += 16.0;
        view.handle_pointer(&mut PointerEvent::moved(x));
        println!("move {x:>4}  {:>4}  {}", view.progress(), render(&view));
    }
    view.handle_pointer(&mut PointerEvent::up(x));

    view.set_step_is_whole(true);
    println!("whole     {:>4}  {}", view.progress(), render(&view));

    view.set_star_count(3);
    println!("3 icons   {:>4}  {}", view.progress(), render(&view));

    Ok(())
}
