use std::fmt;
use std::path::Path;

use crate::{
    config::CanvasConfig,
    config::style::{ColorGrade, StyleSheet, TextStyle},
    overlay::escape::escape_drawtext,
    overlay::program::{OverlayOperation, OverlayProgram},
};

const OUTPUT_LABEL: &str = "out";

/// One `[input]filter[output]` step of an ffmpeg filter graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterNode {
    pub input: String,
    pub filter: String,
    pub output: String,
}

impl FilterNode {
    pub fn new(
        input: impl Into<String>,
        filter: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            input: input.into(),
            filter: filter.into(),
            output: output.into(),
        }
    }
}

impl fmt::Display for FilterNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]{}[{}]", self.input, self.filter, self.output)
    }
}

/// Linear chain of filter nodes, serialized as a `-filter_complex` value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterGraph {
    nodes: Vec<FilterNode>,
}

impl FilterGraph {
    pub fn new(nodes: Vec<FilterNode>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[FilterNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Label of the final video stream, for `-map [label]`.
    pub fn output_label(&self) -> &str {
        self.nodes
            .last()
            .map(|n| n.output.as_str())
            .unwrap_or(OUTPUT_LABEL)
    }
}

impl fmt::Display for FilterGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

/// Lower an overlay program to an ffmpeg filter graph.
///
/// The background (input `0:v`) is scaled to a 9:16 frame at canvas width, cropped to the
/// canvas and color graded; each overlay operation then becomes one `drawtext` node, in program
/// order. The last node is always labelled `out`.
pub fn build_filter_graph(
    program: &OverlayProgram,
    styles: &StyleSheet,
    canvas: &CanvasConfig,
    grade: &ColorGrade,
    font_path: &Path,
) -> FilterGraph {
    let mut nodes = vec![
        FilterNode::new(
            "0:v",
            format!("scale={}:{}", canvas.width, canvas.scaled_height()),
            "scaled",
        ),
        FilterNode::new(
            "scaled",
            format!("crop={}:{}", canvas.width, canvas.height),
            "cropped",
        ),
        FilterNode::new(
            "cropped",
            format!(
                "eq=brightness={}:contrast={}",
                grade.brightness, grade.contrast
            ),
            "graded",
        ),
    ];

    if program.is_empty() {
        nodes.push(FilterNode::new("graded", "null", OUTPUT_LABEL));
        return FilterGraph::new(nodes);
    }

    let font = escape_drawtext(&font_path.to_string_lossy());
    let mut input = "graded".to_owned();
    for (i, op) in program.iter().enumerate() {
        let output = if i + 1 == program.len() {
            OUTPUT_LABEL.to_owned()
        } else {
            format!("o{}", i + 1)
        };
        let filter = drawtext(op, styles.for_slot(op.slot()), &font);
        nodes.push(FilterNode::new(input, filter, output.clone()));
        input = output;
    }
    FilterGraph::new(nodes)
}

fn drawtext(op: &OverlayOperation, style: &TextStyle, font: &str) -> String {
    let mut s = format!(
        "drawtext=fontfile={}:text={}:expansion=none:fontsize={}:fontcolor={}:bordercolor={}:borderw={}:x={}:y={}",
        quote(font),
        quote(op.text()),
        style.font_size,
        style.font_color,
        style.border_color,
        style.border_width,
        style.x,
        style.y,
    );
    if let Some(ls) = style.line_spacing {
        s.push_str(&format!(":line_spacing={ls}"));
    }
    if let Some(w) = op.window() {
        s.push_str(&format!(":enable='gte(t,{:.3})*lt(t,{:.3})'", w.start, w.end));
    }
    s
}

/// Quote an option value for the filter-graph level.
///
/// Quoted text is taken literally up to the next `'`, so an embedded quote closes the string,
/// is emitted as `\'` and the string is reopened.
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/filtergraph.rs"]
mod tests;
