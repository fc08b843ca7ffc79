use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Document, Element, HtmlElement, Node, Text};

use crate::config::{RevealMode, TypeConfig, REVEAL_ATTR};
use crate::error::FxError;
use crate::typewriter::{is_typed_text, reveal_schedule, skips_element};

fn set_timeout(f: impl FnOnce() + 'static, delay_ms: u32) -> Result<(), JsValue> {
    let callback = Closure::once_into_js(f);
    window()
        .ok_or(FxError::NoWindow)?
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            i32::try_from(delay_ms).unwrap_or(i32::MAX),
        )?;
    Ok(())
}

/// Start the typing effect on every element carrying the marker class.
///
/// Each element is independent: one that fails is logged and skipped.
/// Returns how many elements were started.
pub fn type_all(document: &Document, config: &TypeConfig) -> u32 {
    // The collection is live; take a snapshot before touching the DOM.
    let live = document.get_elements_by_class_name(config.marker_class);
    let targets: Vec<Element> = (0..live.length()).filter_map(|i| live.item(i)).collect();
    let mut started = 0;
    for target in &targets {
        match type_element(target, config) {
            Ok(()) => started += 1,
            Err(err) => log::error!("cannot type <{}>: {err:?}", target.tag_name()),
        }
    }
    log::debug!("typing {started} of {} element(s)", targets.len());
    started
}

pub fn type_element(element: &Element, config: &TypeConfig) -> Result<(), JsValue> {
    let mode = match element.get_attribute(REVEAL_ATTR) {
        Some(value) => value.parse()?,
        None => config.mode,
    };
    match (mode, element.dyn_ref::<HtmlElement>()) {
        (RevealMode::Flat, Some(html)) => type_flat(html, config.delay_ms),
        // no innerText outside HTML, so walk the text nodes instead
        _ => type_tree(element, config.delay_ms),
    }
}

fn type_flat(element: &HtmlElement, delay_ms: u32) -> Result<(), JsValue> {
    let target: Rc<str> = element.inner_text().into();
    element.set_inner_text("");

    for step in reveal_schedule(&[&*target], delay_ms) {
        let element = element.clone();
        let target = Rc::clone(&target);
        set_timeout(move || element.set_inner_text(&target[..step.end]), step.at_ms)?;
    }
    Ok(())
}

fn collect_text_nodes(node: &Node, out: &mut Vec<Text>) {
    let children = node.child_nodes();
    for i in 0..children.length() {
        let Some(child) = children.item(i) else { continue };
        match child.node_type() {
            Node::TEXT_NODE => {
                if let Ok(text) = child.dyn_into::<Text>() {
                    if is_typed_text(&text.data()) {
                        out.push(text);
                    }
                }
            }
            Node::ELEMENT_NODE => {
                if !skips_element(&child.node_name()) {
                    collect_text_nodes(&child, out);
                }
            }
            _ => {}
        }
    }
}

fn type_tree(root: &Node, delay_ms: u32) -> Result<(), JsValue> {
    let mut nodes = Vec::new();
    collect_text_nodes(root, &mut nodes);

    let texts: Vec<Rc<str>> = nodes
        .iter()
        .map(|n| n.text_content().unwrap_or_default().into())
        .collect();
    for node in &nodes {
        node.set_text_content(Some(""));
    }

    for step in reveal_schedule(&texts, delay_ms) {
        let node = nodes[step.node].clone();
        let text = Rc::clone(&texts[step.node]);
        set_timeout(move || node.set_text_content(Some(&text[..step.end])), step.at_ms)?;
    }
    Ok(())
}
