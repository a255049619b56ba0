use crate::device::ContextFlavor;

pub const VERTEX_SOURCE: &str = r#"
layout (location = 0) in vec4 vertex_position;
layout (location = 1) in vec4 vertex_color;
uniform mat4 projection;
uniform mat4 modelView;
uniform vec3 normal;

out vec4 fragment_in_color;

void main()
{
    gl_Position = projection * modelView * vertex_position;
    fragment_in_color = vertex_color;
}
"#;

pub const FRAGMENT_SOURCE: &str = r#"
in highp vec4 fragment_in_color;

out highp vec4 FragColor;

void main()
{
    FragColor = fragment_in_color;
}
"#;

/// `#version` line for the context flavor.
///
/// ES 3.0 is the lowest embedded version with `layout(location)` inputs;
/// GLSL 3.30 is its desktop counterpart.
pub const fn version_directive(flavor: ContextFlavor) -> &'static str {
    match flavor {
        ContextFlavor::Embedded => "#version 300 es",
        ContextFlavor::Desktop => "#version 330",
    }
}

/// Prepends `directive` as the first line of `body`.
pub fn with_version(directive: &str, body: &str) -> String {
    format!("{directive}\n{body}")
}
