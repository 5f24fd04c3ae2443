//! Typed wrappers around Plotly.js interop via `js_sys::eval()`.
//!
//! Plotly is loaded from its CDN at startup and used as a global
//! (`window.Plotly`). Figures are passed as JSON object literals, which
//! are valid JS expressions, so no string escaping is needed.

/// Plotly.js bundle injected by [`init_charts`].
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Gapminder JS call failed:', e); }}",
        code
    );
    if let Err(e) = js_sys::eval(&wrapped) {
        log::warn!("js_bridge: eval failed: {:?}", e);
    }
}

/// Inject the Plotly script tag (once) and flag readiness when it has loaded.
pub fn init_charts() {
    call_js(&format!(
        r#"
        (function() {{
            if (window.__gmChartsReady || window.__gmChartsLoading) return;
            window.__gmChartsLoading = true;
            if (typeof Plotly === 'undefined') {{
                var s = document.createElement('script');
                s.src = '{PLOTLY_CDN}';
                s.async = true;
                document.head.appendChild(s);
            }}
            var waitForPlotly = setInterval(function() {{
                if (typeof Plotly !== 'undefined') {{
                    clearInterval(waitForPlotly);
                    window.__gmChartsReady = true;
                    console.log('Gapminder charts initialized');
                }}
            }}, 100);
        }})();
        "#
    ));
}

/// Draw (or redraw in place) a Plotly figure into the given container.
///
/// Polls until Plotly has loaded and the container exists, then calls
/// `Plotly.react`, which replaces the previous figure.
pub fn render_figure(container_id: &str, figure_json: &str) {
    call_js(&format!(
        r#"
        (function() {{
            var fig = {figure_json};
            var poll = setInterval(function() {{
                if (window.__gmChartsReady && document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        Plotly.react('{container_id}', fig.data, fig.layout, {{responsive: true, displaylogo: false}});
                    }} catch(e) {{ console.error('[Gapminder] Plotly.react error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Re-fit a chart to its container after its panel becomes visible.
///
/// Charts drawn while their panel was hidden get a zero-width layout. The
/// resize is deferred so it runs after the panel's `display` has changed.
pub fn resize_chart(container_id: &str) {
    call_js(&format!(
        r#"
        setTimeout(function() {{
            var el = document.getElementById('{container_id}');
            if (el && window.__gmChartsReady && el.data) Plotly.Plots.resize(el);
        }}, 50);
        "#
    ));
}

/// Set the browser tab title.
pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}
