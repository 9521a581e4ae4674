use crate::dashboard::{ChartBar, ChartCriterion, Extreme};
use maud::{html, Markup};

const WIDTH: f64 = 760.0;
const HEIGHT: f64 = 460.0;
const LEFT: f64 = 80.0;
const RIGHT: f64 = 20.0;
const TOP: f64 = 50.0;
const BOTTOM: f64 = 60.0;
const TICKS: u32 = 4;

const PALETTE: [&str; 8] = [
    "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692", "#b6e880",
];

/// Inline SVG bar chart, one bar per brand labeled with the model name.
pub fn bar_chart(criterion: ChartCriterion, extreme: Extreme, bars: &[ChartBar]) -> Markup {
    let title = format!("{} {} Phone from Each Brand", extreme.title(), criterion.label());

    // Leave 10% headroom above the tallest bar for its labels.
    let top = bars.iter().map(|b| b.value).fold(0.0, f64::max) * 1.1;
    let top = if top > 0.0 { top } else { 1.0 };

    let plot_w = WIDTH - LEFT - RIGHT;
    let plot_h = HEIGHT - TOP - BOTTOM;
    let slot = plot_w / bars.len().max(1) as f64;

    html! {
        div id="chart" {
            @if bars.is_empty() {
                p { "No numeric " (criterion.label()) " values to compare." }
            } @else {
                svg
                    xmlns="http://www.w3.org/2000/svg"
                    width=(WIDTH)
                    height=(HEIGHT)
                    viewBox=(format!("0 0 {WIDTH} {HEIGHT}"))
                    role="img"
                    aria-label=(title)
                {
                    text x=(WIDTH / 2.0) y="28" text-anchor="middle" font-size="16" font-weight="600" { (title) }

                    @for i in 0..=TICKS {
                        @let y = TOP + plot_h - plot_h * i as f64 / TICKS as f64;
                        line x1=(LEFT) y1=(y) x2=(LEFT + plot_w) y2=(y) stroke="#e5e7eb" {}
                        text x=(LEFT - 8.0) y=(y + 4.0) text-anchor="end" font-size="11" {
                            (tick_label(top * i as f64 / TICKS as f64, top))
                        }
                    }
                    line x1=(LEFT) y1=(TOP) x2=(LEFT) y2=(TOP + plot_h) stroke="#9ca3af" {}

                    @for (i, bar) in bars.iter().enumerate() {
                        @let h = bar.value.max(0.0) / top * plot_h;
                        @let w = slot * 0.6;
                        @let x = LEFT + slot * i as f64 + slot * 0.2;
                        @let y = TOP + plot_h - h;
                        @let cx = x + w / 2.0;
                        rect x=(x) y=(y) width=(w) height=(h) fill=(PALETTE[i % PALETTE.len()]) {
                            title { (bar.model) ": " (format!("{:.2}", bar.value)) }
                        }
                        text x=(cx) y=(y - 20.0) text-anchor="middle" font-size="12" { (bar.model) }
                        text x=(cx) y=(y - 6.0) text-anchor="middle" font-size="12" { (format!("{:.2}", bar.value)) }
                        text x=(cx) y=(TOP + plot_h + 18.0) text-anchor="middle" font-size="13" { (bar.brand) }
                    }

                    text x=(LEFT + plot_w / 2.0) y=(HEIGHT - 12.0) text-anchor="middle" font-size="13" { "Brand" }
                    text
                        transform=(format!("translate(18 {}) rotate(-90)", TOP + plot_h / 2.0))
                        text-anchor="middle"
                        font-size="13"
                    {
                        (criterion.label())
                    }
                }
            }
        }
    }
}

fn tick_label(value: f64, top: f64) -> String {
    if top >= 100.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
