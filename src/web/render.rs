use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Date, Float32Array, Object, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, HtmlCanvasElement, MediaQueryList, WebGlProgram, WebGlRenderingContext as GL,
    WebGlShader, WebGlUniformLocation,
};

use crate::config::{ContextOptions, SketchConfig};
use crate::curve::day_offset;
use crate::error::FxError;
use crate::grid::PointGrid;
use crate::shaders;

const DARK_SCHEME: &str = "(prefers-color-scheme: dark)";

/// A linked program plus whatever the driver complained about.
pub struct Linked {
    pub program: WebGlProgram,
    /// Compile and link info logs, empty when everything succeeded.
    pub diagnostics: Vec<String>,
}

/// Acquire a WebGL1 context with the sketch's context attributes.
pub fn context(canvas: &HtmlCanvasElement, options: &ContextOptions) -> Result<GL, JsValue> {
    let attrs = Object::new();
    for (key, value) in options.entries() {
        Reflect::set(&attrs, &key.into(), &value.into())?;
    }
    let gl: GL = canvas
        .get_context_with_context_options("webgl", &attrs)?
        .ok_or(FxError::NoContext)?
        .dyn_into()?;
    Ok(gl)
}

fn compile(
    gl: &GL,
    kind: u32,
    source: &str,
    diagnostics: &mut Vec<String>,
) -> Result<WebGlShader, FxError> {
    let shader = gl.create_shader(kind).ok_or(FxError::Alloc("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let ok = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if !ok {
        let log = gl
            .get_shader_info_log(&shader)
            .unwrap_or_else(|| "unknown compile error".to_string());
        log::error!("shader compile failed: {log}");
        diagnostics.push(log);
    }
    Ok(shader)
}

/// Compile and link the point-grid program.
///
/// Compile or link failures are logged and collected, never fatal: the
/// sketch keeps running and simply draws nothing.
pub fn link_program(gl: &GL) -> Result<Linked, FxError> {
    let mut diagnostics = Vec::new();
    let vertex = compile(gl, GL::VERTEX_SHADER, shaders::VERTEX, &mut diagnostics)?;
    let fragment = compile(gl, GL::FRAGMENT_SHADER, shaders::FRAGMENT, &mut diagnostics)?;

    let program = gl.create_program().ok_or(FxError::Alloc("program"))?;
    gl.attach_shader(&program, &vertex);
    gl.attach_shader(&program, &fragment);
    gl.link_program(&program);

    let linked = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if !linked {
        let log = gl
            .get_program_info_log(&program)
            .unwrap_or_else(|| "unknown link error".to_string());
        log::error!("program link failed: {log}");
        diagnostics.push(log);
    }
    Ok(Linked { program, diagnostics })
}

/// Match the drawing buffer to the page at device resolution.
fn resize(canvas: &HtmlCanvasElement, gl: &GL) {
    let Some(window) = window() else { return };
    let Some(root) = window.document().and_then(|d| d.document_element()) else {
        return;
    };
    let dpr = window.device_pixel_ratio();
    let width = (dpr * root.client_width() as f64) as u32;
    let height = (dpr * root.client_height() as f64) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    gl.viewport(0, 0, width as i32, height as i32);
}

struct Uniforms {
    t: Option<WebGlUniformLocation>,
    color: Option<WebGlUniformLocation>,
    res: Option<WebGlUniformLocation>,
}

/// Everything the per-frame callback touches.
struct Sketch {
    gl: GL,
    canvas: HtmlCanvasElement,
    uniforms: Uniforms,
    dark: Option<MediaQueryList>,
    start: f64,
    count: i32,
}

impl Sketch {
    fn frame(&self) {
        let gl = &self.gl;
        if self.dark.as_ref().is_some_and(|q| q.matches()) {
            gl.uniform4f(self.uniforms.color.as_ref(), 1.0, 1.0, 1.0, 1.0);
        } else {
            gl.uniform4f(self.uniforms.color.as_ref(), 0.0, 0.0, 0.0, 1.0);
        }
        gl.uniform2f(
            self.uniforms.res.as_ref(),
            self.canvas.width() as f32,
            self.canvas.height() as f32,
        );
        let t = (Date::now() / 1000.0 - self.start) as f32;
        gl.uniform1f(self.uniforms.t.as_ref(), t);

        gl.clear(GL::COLOR_BUFFER_BIT);
        gl.draw_arrays(GL::POINTS, 0, self.count);
    }
}

fn request_frame(f: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window()
        .ok_or(FxError::NoWindow)?
        .request_animation_frame(f.as_ref().unchecked_ref())
}

/// Set up the point-grid sketch on `canvas` and start its render loop.
pub fn start(canvas: HtmlCanvasElement, config: &SketchConfig) -> Result<(), JsValue> {
    let window = window().ok_or(FxError::NoWindow)?;
    let gl = context(&canvas, &config.context)?;

    // fwidth() for the antialiased point edge
    if gl.get_extension("OES_standard_derivatives")?.is_none() {
        log::warn!("OES_standard_derivatives unavailable, points will be aliased");
    }
    gl.enable(GL::BLEND);
    gl.blend_func(GL::ONE, GL::ONE_MINUS_SRC_ALPHA);

    resize(&canvas, &gl);
    let resize_closure = {
        let canvas = canvas.clone();
        let gl = gl.clone();
        Closure::wrap(Box::new(move || resize(&canvas, &gl)) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    let Linked { program, .. } = link_program(&gl)?;
    gl.use_program(Some(&program));

    let grid = PointGrid::new(config.columns, config.rows);
    let buffer = gl.create_buffer().ok_or(FxError::Alloc("vertex buffer"))?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    let data = Float32Array::from(grid.flat());
    gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &data, GL::STATIC_DRAW);

    let pos = gl.get_attrib_location(&program, shaders::ATTR_POS);
    if pos < 0 {
        log::warn!("attribute {} not active", shaders::ATTR_POS);
    } else {
        gl.enable_vertex_attrib_array(pos as u32);
        gl.vertex_attrib_pointer_with_i32(pos as u32, 2, GL::FLOAT, false, 0, 0);
    }

    let start = Date::now() / 1000.0;
    gl.uniform1f(
        gl.get_uniform_location(&program, shaders::U_OFFSET).as_ref(),
        day_offset(start),
    );
    gl.uniform1f(
        gl.get_uniform_location(&program, shaders::U_SCALE).as_ref(),
        config.scale * window.device_pixel_ratio() as f32,
    );

    let sketch = Sketch {
        uniforms: Uniforms {
            t: gl.get_uniform_location(&program, shaders::U_TIME),
            color: gl.get_uniform_location(&program, shaders::U_COLOR),
            res: gl.get_uniform_location(&program, shaders::U_RES),
        },
        dark: window.match_media(DARK_SCHEME)?,
        count: grid.vertex_count(),
        gl,
        canvas,
        start,
    };
    log::info!("sketch running: {}x{} points", grid.columns(), grid.rows());

    // `f` holds the animation-frame closure so it can reschedule itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        sketch.frame();

        if let Some(next) = f.borrow().as_ref() {
            if let Err(err) = request_frame(next) {
                log::error!("requestAnimationFrame failed: {err:?}");
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(first) = g.borrow().as_ref() {
        request_frame(first)?;
    }
    Ok(())
}
