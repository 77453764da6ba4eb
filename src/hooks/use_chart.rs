use charming::{Chart, renderer::WasmRenderer};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::utils::debounce::create_debounced_resize_listener;

/// Turns view data into a chart definition
pub type ChartBuilder<T> = fn(&T) -> Chart;

/// Draws `build(data)` into the element with id `chart_id` inside
/// `container_ref`, and redraws after window resizes settle.
#[hook]
pub fn use_chart<T>(
    container_ref: NodeRef,
    chart_id: &'static str,
    data: Rc<T>,
    build: ChartBuilder<T>,
) where
    T: PartialEq + 'static,
{
    use_effect_with((data, container_ref), move |(data, container_ref)| {
        let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
            render_chart(&container, chart_id, &build(data));

            let data = data.clone();
            create_debounced_resize_listener(
                move || render_chart(&container, chart_id, &build(&data)),
                Config::RESIZE_DEBOUNCE_MS,
            )
        });

        move || drop(listener)
    });
}

fn render_chart(container: &HtmlElement, chart_id: &str, chart: &Chart) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    if let Err(e) = WasmRenderer::new(width, height).render(chart_id, chart) {
        gloo::console::error!(format!("Render error for {chart_id}: {e:?}"));
    }
}
