//! SVG donut chart with a hover caption and chip legend.

use contracts::dashboards::sales_overview::CategorySlice;
use leptos::prelude::*;

const SIZE: f64 = 240.0;
const CENTER: f64 = 120.0;
const OUTER_R: f64 = 110.0;
const INNER_R: f64 = 62.0;

/// Slice palette, cycled by index.
const PALETTE: [&str; 5] = ["#00F5FF", "#7B42F6", "#FF7C48", "#25D07D", "#FF5E7D"];

#[component]
pub fn DonutChart(
    /// Slices in display order
    slices: Vec<CategorySlice>,
    /// Caption for the hovered slice
    hover_label: Callback<CategorySlice, String>,
) -> impl IntoView {
    let hovered: RwSignal<Option<usize>> = RwSignal::new(None);
    let slices = StoredValue::new(slices);

    let segments = move || {
        slices.with_value(|slices| {
            let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
            slice_fractions(&values)
                .into_iter()
                .enumerate()
                .filter(|&(_, (start, end))| end > start)
                .map(|(i, (start, end))| {
                    let slice_class = move || {
                        if hovered.get() == Some(i) {
                            "donut-chart__slice donut-chart__slice--hovered"
                        } else {
                            "donut-chart__slice"
                        }
                    };
                    view! {
                        <path
                            class=slice_class
                            d=arc_path(start, end)
                            fill=PALETTE[i % PALETTE.len()]
                            on:mouseenter=move |_| hovered.set(Some(i))
                            on:mouseleave=move |_| hovered.set(None)
                        />
                    }
                })
                .collect_view()
        })
    };

    let caption = move || {
        hovered.get().and_then(|i| {
            slices
                .with_value(|slices| slices.get(i).cloned())
                .map(|slice| hover_label.run(slice))
        })
    };

    let legend = slices.with_value(|slices| {
        slices
            .iter()
            .enumerate()
            .map(|(i, slice)| {
                view! {
                    <li class="donut-chart__legend-item">
                        <span
                            class="donut-chart__legend-dot"
                            style=format!("background: {}", PALETTE[i % PALETTE.len()])
                        ></span>
                        {slice.name.clone()}
                    </li>
                }
            })
            .collect_view()
    });

    view! {
        <div class="donut-chart">
            <svg class="donut-chart__svg" viewBox=format!("0 0 {} {}", SIZE, SIZE)>
                {segments}
            </svg>
            <div class="donut-chart__caption">{caption}</div>
            <ul class="donut-chart__legend">{legend}</ul>
        </div>
    }
}

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// Normalized (start, end) turn fractions per value, in input order.
/// A non-positive total yields empty (0, 0) slices.
fn slice_fractions(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return values.iter().map(|_| (0.0, 0.0)).collect();
    }
    let mut acc = 0.0;
    values
        .iter()
        .map(|v| {
            let start = acc;
            acc += v / total;
            (start, acc)
        })
        .collect()
}

/// Point on a circle of `radius` at `frac` turns from 12 o'clock, clockwise.
fn ring_point(radius: f64, frac: f64) -> (f64, f64) {
    let angle = (frac - 0.25) * std::f64::consts::TAU;
    (CENTER + radius * angle.cos(), CENTER + radius * angle.sin())
}

/// SVG path for one ring segment between two turn fractions.
fn arc_path(start: f64, end: f64) -> String {
    let (x0, y0) = ring_point(OUTER_R, start);
    let (x1, y1) = ring_point(OUTER_R, end);
    let (x2, y2) = ring_point(INNER_R, end);
    let (x3, y3) = ring_point(INNER_R, start);
    let large = if end - start > 0.5 { 1 } else { 0 };
    format!(
        "M {x0:.2} {y0:.2} A {or:.2} {or:.2} 0 {large} 1 {x1:.2} {y1:.2} L {x2:.2} {y2:.2} A {ir:.2} {ir:.2} 0 {large} 0 {x3:.2} {y3:.2} Z",
        or = OUTER_R,
        ir = INNER_R,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_slice_fractions_are_cumulative() {
        let fractions = slice_fractions(&[35.0, 25.0, 20.0, 15.0, 5.0]);
        assert_eq!(fractions.len(), 5);
        assert!(close(fractions[0].0, 0.0));
        assert!(close(fractions[0].1, 0.35));
        assert!(close(fractions[1].1, 0.60));
        assert!(close(fractions[2].1, 0.80));
        assert!(close(fractions[3].1, 0.95));
        assert!(close(fractions[4].1, 1.0));
    }

    #[test]
    fn test_slice_fractions_normalize_any_total() {
        // 50 + 50 = 100 regardless of the unit
        let fractions = slice_fractions(&[1.0, 1.0]);
        assert!(close(fractions[0].1, 0.5));
        assert!(close(fractions[1].1, 1.0));
    }

    #[test]
    fn test_slice_fractions_zero_total_collapses() {
        let fractions = slice_fractions(&[0.0, 0.0]);
        assert!(fractions.iter().all(|&(s, e)| s == 0.0 && e == 0.0));
    }

    #[test]
    fn test_ring_point_starts_at_twelve_oclock() {
        let (x, y) = ring_point(OUTER_R, 0.0);
        assert!(close(x, CENTER));
        assert!(close(y, CENTER - OUTER_R));

        // a quarter turn later the point is at 3 o'clock
        let (x, y) = ring_point(OUTER_R, 0.25);
        assert!(close(x, CENTER + OUTER_R));
        assert!(close(y, CENTER));
    }

    #[test]
    fn test_arc_path_shape() {
        let path = arc_path(0.0, 0.35);
        assert!(path.starts_with("M "));
        assert!(path.ends_with('Z'));
        // two arcs per segment (outer rim and inner rim)
        assert_eq!(path.matches(" A ").count(), 2);
    }

    #[test]
    fn test_arc_path_large_flag_past_half_turn() {
        let small = arc_path(0.0, 0.35);
        let large = arc_path(0.0, 0.65);
        assert!(small.contains(" 0 0 1 "));
        assert!(large.contains(" 0 1 1 "));
    }
}
