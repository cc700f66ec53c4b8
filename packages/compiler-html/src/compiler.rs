use blockpress_editor::{Block, InteractionMode};
use blockpress_renderer::{render_page, VNode};
use thiserror::Error;

/// Errors that can occur during HTML compilation
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Compilation error: {0}")]
    Generic(String),
}

impl From<String> for CompileError {
    fn from(s: String) -> Self {
        CompileError::Generic(s)
    }
}

impl From<&str> for CompileError {
    fn from(s: &str) -> Self {
        CompileError::Generic(s.to_string())
    }
}

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Embed the base block stylesheet in the head
    pub base_styles: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            base_styles: true,
        }
    }
}

/// Minimal presentation for the built-in block classes
const BASE_STYLES: &str = "body { margin: 0; font-family: system-ui, sans-serif; }\n\
.block-heading { font-size: 1.5rem; font-weight: 700; }\n\
.block-image-placeholder { background: #f4f4f5; border: 2px dashed #d4d4d8; border-radius: 8px; text-align: center; }\n\
.block-form { display: grid; gap: 0.5rem; }";

struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        let indent = self.options.indent.clone();
        for _ in 0..self.depth {
            self.add(&indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile a page (title + ordered block list) to a static HTML
/// document. Blocks are rendered in their final, preview form.
pub fn compile_page(
    title: &str,
    blocks: &[Block],
    options: CompileOptions,
) -> Result<String, CompileError> {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html>");
    ctx.indent();

    compile_head(title, &mut ctx);

    ctx.add_line("<body>");
    ctx.indent();

    let page = render_page(blocks, InteractionMode::Preview, None);
    for node in &page.nodes {
        compile_node(node, &mut ctx)?;
    }

    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    Ok(ctx.get_output())
}

fn compile_head(title: &str, ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line(&format!("<title>{}</title>", escape_html(title)));

    if ctx.options.base_styles {
        ctx.add_line("<style>");
        for line in BASE_STYLES.lines() {
            ctx.add_line(line);
        }
        ctx.add_line("</style>");
    }

    ctx.dedent();
    ctx.add_line("</head>");
}

fn compile_node(node: &VNode, ctx: &mut Context) -> Result<(), CompileError> {
    match node {
        VNode::Text { content } => {
            ctx.add_line(&escape_html(content));
            Ok(())
        }
        VNode::Element {
            tag,
            attributes,
            styles,
            children,
        } => {
            if ctx.options.pretty {
                ctx.add_indent();
            }
            ctx.add(&format!("<{}", tag));

            // Attribute order is sorted so output is deterministic
            let mut attrs: Vec<(&String, &String)> = attributes.iter().collect();
            attrs.sort();
            for (name, value) in attrs {
                ctx.add(&format!(" {}=\"{}\"", name, escape_html(value)));
            }

            if !styles.is_empty() {
                let mut props: Vec<(String, &String)> = styles
                    .iter()
                    .map(|(name, value)| (css_property(name), value))
                    .collect();
                props.sort();
                let inline = props
                    .iter()
                    .map(|(name, value)| format!("{}: {}", name, value))
                    .collect::<Vec<_>>()
                    .join("; ");
                ctx.add(&format!(" style=\"{}\"", escape_html(&inline)));
            }

            if is_self_closing(tag) && children.is_empty() {
                ctx.add(" />");
                if ctx.options.pretty {
                    ctx.add("\n");
                }
                return Ok(());
            }

            ctx.add(">");

            if children.is_empty() {
                ctx.add(&format!("</{}>", tag));
                if ctx.options.pretty {
                    ctx.add("\n");
                }
                return Ok(());
            }

            if text_only(children) {
                // Keep text content on one line with its tags
                for child in children {
                    if let VNode::Text { content } = child {
                        ctx.add(&escape_html(content));
                    }
                }
                ctx.add(&format!("</{}>", tag));
                if ctx.options.pretty {
                    ctx.add("\n");
                }
                return Ok(());
            }

            if ctx.options.pretty {
                ctx.add("\n");
            }
            ctx.indent();
            for child in children {
                compile_node(child, ctx)?;
            }
            ctx.dedent();
            if ctx.options.pretty {
                ctx.add_indent();
            }
            ctx.add(&format!("</{}>", tag));
            if ctx.options.pretty {
                ctx.add("\n");
            }

            Ok(())
        }
    }
}

/// camelCase style property → CSS property name
/// (`fontSize` → `font-size`; names without uppercase pass through)
fn css_property(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_self_closing(tag: &str) -> bool {
    matches!(
        tag,
        "img"
            | "input"
            | "br"
            | "hr"
            | "meta"
            | "link"
            | "area"
            | "base"
            | "col"
            | "embed"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

fn text_only(children: &[VNode]) -> bool {
    children.iter().all(|child| matches!(child, VNode::Text { .. }))
}
