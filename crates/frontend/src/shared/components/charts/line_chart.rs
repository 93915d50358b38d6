//! SVG line chart with hoverable point markers.

use contracts::dashboards::sales_overview::MetricPoint;
use leptos::prelude::*;

// Fixed drawing surface; the svg scales to its container.
const VIEW_W: f64 = 640.0;
const VIEW_H: f64 = 280.0;
const PAD_LEFT: f64 = 52.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 28.0;
/// Number of horizontal grid segments; ticks = segments + 1.
const Y_SEGMENTS: usize = 4;
/// Upper bound on x-axis labels; first and last point are always labeled.
const MAX_X_LABELS: usize = 7;

#[component]
pub fn LineChart(
    /// Points to plot, oldest first
    #[prop(into)]
    points: Signal<Vec<MetricPoint>>,
    /// Stroke and marker color
    #[prop(into)]
    color: Signal<&'static str>,
    /// Y-axis tick label builder
    format_tick: Callback<f64, String>,
    /// Tooltip body builder for a hovered point
    format_value: Callback<f64, String>,
) -> impl IntoView {
    let hovered: RwSignal<Option<usize>> = RwSignal::new(None);

    let upper = Memo::new(move |_| {
        points.with(|points| {
            nice_upper_bound(points.iter().map(|p| p.value).fold(0.0, f64::max))
        })
    });

    let grid = move || {
        let upper = upper.get();
        tick_values(upper, Y_SEGMENTS)
            .into_iter()
            .map(|tick| {
                let y = y_at(tick, upper);
                view! {
                    <line
                        class="line-chart__grid"
                        x1=format!("{:.1}", PAD_LEFT)
                        y1=format!("{:.1}", y)
                        x2=format!("{:.1}", VIEW_W - PAD_RIGHT)
                        y2=format!("{:.1}", y)
                    />
                    <text
                        class="line-chart__tick"
                        x=format!("{:.1}", PAD_LEFT - 8.0)
                        y=format!("{:.1}", y + 4.0)
                        text-anchor="end"
                    >
                        {format_tick.run(tick)}
                    </text>
                }
            })
            .collect_view()
    };

    let x_labels = move || {
        points.with(|points| {
            let n = points.len();
            label_indices(n, MAX_X_LABELS)
                .into_iter()
                .map(|i| {
                    view! {
                        <text
                            class="line-chart__label"
                            x=format!("{:.1}", x_at(i, n))
                            y=format!("{:.1}", VIEW_H - 8.0)
                            text-anchor="middle"
                        >
                            {points[i].label.clone()}
                        </text>
                    }
                })
                .collect_view()
        })
    };

    let line_points = move || {
        let upper = upper.get();
        points.with(|points| {
            let values: Vec<f64> = points.iter().map(|p| p.value).collect();
            polyline_points(&values, upper)
        })
    };

    let markers = move || {
        let upper = upper.get();
        points.with(|points| {
            let n = points.len();
            points
                .iter()
                .enumerate()
                .map(|(i, point)| {
                    let marker_r = move || if hovered.get() == Some(i) { "6" } else { "4" };
                    view! {
                        <circle
                            class="line-chart__marker"
                            cx=format!("{:.1}", x_at(i, n))
                            cy=format!("{:.1}", y_at(point.value, upper))
                            r=marker_r
                            fill=move || color.get()
                            on:mouseenter=move |_| hovered.set(Some(i))
                            on:mouseleave=move |_| hovered.set(None)
                        />
                    }
                })
                .collect_view()
        })
    };

    let tooltip = move || {
        hovered.get().and_then(|i| {
            points.with(|points| {
                points.get(i).map(|point| {
                    let left = x_at(i, points.len()) / VIEW_W * 100.0;
                    view! {
                        <div class="line-chart__tooltip" style=format!("left: {:.1}%;", left)>
                            <div class="line-chart__tooltip-label">{point.label.clone()}</div>
                            <div
                                class="line-chart__tooltip-value"
                                style=move || format!("color: {};", color.get())
                            >
                                {format_value.run(point.value)}
                            </div>
                        </div>
                    }
                })
            })
        })
    };

    view! {
        <div class="line-chart">
            <svg
                class="line-chart__svg"
                viewBox=format!("0 0 {} {}", VIEW_W, VIEW_H)
                preserveAspectRatio="xMidYMid meet"
            >
                {grid}
                {x_labels}
                <polyline
                    class="line-chart__line"
                    points=line_points
                    fill="none"
                    stroke=move || color.get()
                    stroke-width="3"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                />
                {markers}
            </svg>
            {tooltip}
        </div>
    }
}

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// Smallest "nice" axis bound (1 / 2 / 2.5 / 5 times a power of ten) at or
/// above `max`. Never returns 0 so value-to-pixel mapping stays defined.
fn nice_upper_bound(max: f64) -> f64 {
    if max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    for step in [1.0, 2.0, 2.5, 5.0] {
        let candidate = step * magnitude;
        if candidate >= max {
            return candidate;
        }
    }
    10.0 * magnitude
}

/// Evenly spaced tick values from 0 to `upper` inclusive.
fn tick_values(upper: f64, segments: usize) -> Vec<f64> {
    (0..=segments)
        .map(|i| upper * i as f64 / segments as f64)
        .collect()
}

/// X pixel for point `i` of `n`; a single point sits in the middle.
fn x_at(i: usize, n: usize) -> f64 {
    let plot_w = VIEW_W - PAD_LEFT - PAD_RIGHT;
    if n <= 1 {
        return PAD_LEFT + plot_w / 2.0;
    }
    PAD_LEFT + plot_w * i as f64 / (n - 1) as f64
}

/// Y pixel for a value against the axis upper bound (y grows downward).
fn y_at(value: f64, upper: f64) -> f64 {
    let plot_h = VIEW_H - PAD_TOP - PAD_BOTTOM;
    PAD_TOP + plot_h * (1.0 - value / upper)
}

/// "x,y x,y ..." attribute for the polyline.
fn polyline_points(values: &[f64], upper: f64) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{:.1},{:.1}", x_at(i, values.len()), y_at(*v, upper)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Indices whose x labels are drawn. The first and last point always keep
/// their labels; `max_labels` must be at least 2.
fn label_indices(n: usize, max_labels: usize) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }
    if n <= max_labels {
        return (0..n).collect();
    }
    let step = (n - 1).div_ceil(max_labels - 1);
    let mut indices: Vec<usize> = (0..n).step_by(step).collect();
    if indices.last() != Some(&(n - 1)) {
        indices.push(n - 1);
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_upper_bound() {
        assert_eq!(nice_upper_bound(14890.0), 20000.0);
        assert_eq!(nice_upper_bound(97.0), 100.0);
        assert_eq!(nice_upper_bound(150.0), 200.0);
        assert_eq!(nice_upper_bound(2400.0), 2500.0);
        assert_eq!(nice_upper_bound(1000.0), 1000.0);
    }

    #[test]
    fn test_nice_upper_bound_degenerate_input() {
        assert_eq!(nice_upper_bound(0.0), 1.0);
        assert_eq!(nice_upper_bound(-5.0), 1.0);
    }

    #[test]
    fn test_tick_values_span_zero_to_upper() {
        let ticks = tick_values(20000.0, 4);
        assert_eq!(ticks, vec![0.0, 5000.0, 10000.0, 15000.0, 20000.0]);
    }

    #[test]
    fn test_x_positions_span_plot_width() {
        assert_eq!(x_at(0, 30), PAD_LEFT);
        assert_eq!(x_at(29, 30), VIEW_W - PAD_RIGHT);
        // single point sits centered
        let mid = PAD_LEFT + (VIEW_W - PAD_LEFT - PAD_RIGHT) / 2.0;
        assert_eq!(x_at(0, 1), mid);
    }

    #[test]
    fn test_y_positions_span_plot_height() {
        assert_eq!(y_at(1000.0, 1000.0), PAD_TOP);
        assert_eq!(y_at(0.0, 1000.0), VIEW_H - PAD_BOTTOM);
    }

    #[test]
    fn test_polyline_has_one_pair_per_value() {
        let attr = polyline_points(&[1.0, 2.0, 3.0], 5.0);
        assert_eq!(attr.split(' ').count(), 3);
        assert!(attr.split(' ').all(|pair| pair.contains(',')));
    }

    #[test]
    fn test_label_indices_small_series_keeps_all() {
        assert_eq!(label_indices(7, 7), vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(label_indices(1, 7), vec![0]);
        assert!(label_indices(0, 7).is_empty());
    }

    #[test]
    fn test_label_indices_subsamples_long_series() {
        let indices = label_indices(30, 7);
        assert_eq!(indices, vec![0, 5, 10, 15, 20, 25, 29]);
        assert!(indices.len() <= 7);
    }
}
