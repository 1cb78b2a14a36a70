//! Chart.js Renderer
//!
//! Builds the sales chart with the global `Chart` constructor. The JSON part
//! of the configuration is parsed into a JS object, then the two non-JSON
//! pieces are patched in: the canvas gradient fill and the tick label callback.

use js_sys::Reflect;
use seller_dashboard::{format_tick, ChartConfig, ChartRenderer, DashboardError, DashboardResult};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[wasm_bindgen]
extern "C" {
    /// Chart.js chart instance
    #[wasm_bindgen(js_name = Chart)]
    pub type JsChart;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(ctx: &CanvasRenderingContext2d, config: &JsValue) -> Result<JsChart, JsValue>;

    #[wasm_bindgen(method, js_class = "Chart")]
    fn destroy(this: &JsChart);
}

type TickCallback = Closure<dyn Fn(JsValue) -> JsValue>;

/// A live chart and the callback it calls into
pub struct ChartHandle {
    chart: JsChart,
    // Must outlive the chart
    _tick_callback: Option<TickCallback>,
}

/// Renders onto the canvas with the configured id
pub struct ChartJsRenderer {
    canvas_id: String,
}

impl ChartJsRenderer {
    pub fn new(canvas_id: &str) -> Self {
        Self {
            canvas_id: canvas_id.to_string(),
        }
    }

    fn context(&self) -> DashboardResult<CanvasRenderingContext2d> {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&self.canvas_id))
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or_else(|| DashboardError::Chart(format!("canvas #{} not found", self.canvas_id)))?;

        canvas
            .get_context("2d")
            .map_err(js_error)?
            .ok_or_else(|| DashboardError::Chart("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| DashboardError::Chart("unexpected context type".to_string()))
    }

    fn build(&self, config: &ChartConfig) -> DashboardResult<ChartHandle> {
        let ctx = self.context()?;
        let js_config = js_sys::JSON::parse(&config.to_json()?).map_err(js_error)?;

        for (index, fill) in config.fill_gradients() {
            let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, fill.height);
            for stop in &fill.stops {
                gradient
                    .add_color_stop(stop.offset as f32, &stop.color)
                    .map_err(js_error)?;
            }

            let index = index.to_string();
            set_path(
                &js_config,
                &["data", "datasets", index.as_str(), "backgroundColor"],
                gradient.as_ref(),
            )
            .map_err(js_error)?;
        }

        let tick_callback = config.y_tick_prefix().map(|prefix| {
            let prefix = prefix.to_string();
            TickCallback::new(move |value: JsValue| {
                JsValue::from_str(&format_tick(&prefix, value.as_f64().unwrap_or_default()))
            })
        });
        if let Some(callback) = &tick_callback {
            set_path(
                &js_config,
                &["options", "scales", "y", "ticks", "callback"],
                callback.as_ref(),
            )
            .map_err(js_error)?;
        }

        let chart = JsChart::new(&ctx, &js_config).map_err(js_error)?;

        Ok(ChartHandle {
            chart,
            _tick_callback: tick_callback,
        })
    }
}

impl ChartRenderer for ChartJsRenderer {
    type Instance = ChartHandle;

    fn construct(&mut self, config: &ChartConfig) -> DashboardResult<ChartHandle> {
        self.build(config).map_err(|e| {
            web_sys::console::warn_1(&format!("Sales chart not rendered: {}", e).into());
            e
        })
    }

    fn destroy(&mut self, instance: ChartHandle) {
        instance.chart.destroy();
    }
}

/// Set `root[path[0]]...[path[n]] = value`; every intermediate key must exist
fn set_path(root: &JsValue, path: &[&str], value: &JsValue) -> Result<(), JsValue> {
    let (last, parents) = path
        .split_last()
        .ok_or_else(|| JsValue::from_str("empty property path"))?;

    let mut target = root.clone();
    for key in parents {
        target = Reflect::get(&target, &JsValue::from_str(key))?;
    }

    Reflect::set(&target, &JsValue::from_str(last), value)?;
    Ok(())
}

fn js_error(err: JsValue) -> DashboardError {
    DashboardError::Chart(format!("{:?}", err))
}
