use anyhow::{Context, Result};

use crate::device::Device;

use super::{
    version_directive, with_version, FRAGMENT_SOURCE, MODEL_VIEW_UNIFORM, NORMAL_UNIFORM,
    PROJECTION_UNIFORM, VERTEX_SOURCE,
};

/// Uniform handles resolved once after linking.
///
/// A uniform the driver optimized out resolves to `None` and its upload is
/// skipped.
#[derive(Debug, Clone)]
pub struct Uniforms<U> {
    pub projection: Option<U>,
    pub model_view: Option<U>,
    pub normal: Option<U>,
}

/// Linked program plus its uniform handles.
#[derive(Debug)]
pub struct ShaderProgram<D: Device> {
    pub program: D::Program,
    pub uniforms: Uniforms<D::Uniform>,
}

impl<D: Device> ShaderProgram<D> {
    /// Compiles and links the fixed pair.
    ///
    /// `version` overrides the `#version` line chosen from the device flavor.
    pub fn build(device: &mut D, version: Option<&str>) -> Result<Self> {
        let flavor = device.flavor();
        let directive = version.unwrap_or(version_directive(flavor));

        let vertex = with_version(directive, VERTEX_SOURCE);
        let fragment = with_version(directive, FRAGMENT_SOURCE);

        let program = device
            .create_program(&vertex, &fragment)
            .with_context(|| format!("failed to build immediate-mode program ({directive})"))?;

        let mut lookup = |name: &str| {
            let location = device.uniform_location(program, name);
            if location.is_none() {
                log::debug!("uniform `{name}` is not active; uploads to it are skipped");
            }
            location
        };

        let uniforms = Uniforms {
            projection: lookup(PROJECTION_UNIFORM),
            model_view: lookup(MODEL_VIEW_UNIFORM),
            normal: lookup(NORMAL_UNIFORM),
        };

        log::debug!("immediate-mode program ready ({flavor:?}, {directive})");

        Ok(Self { program, uniforms })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{ContextFlavor, Op, TraceDevice};

    fn sources(device: &TraceDevice) -> (String, String) {
        match &device.ops()[0] {
            Op::CreateProgram { vertex, fragment, .. } => (vertex.clone(), fragment.clone()),
            other => panic!("unexpected op {other:?}"),
        }
    }

    #[test]
    fn embedded_flavor_gets_es_directive() {
        let mut d = TraceDevice::new(ContextFlavor::Embedded);
        ShaderProgram::build(&mut d, None).unwrap();
        let (v, f) = sources(&d);
        assert!(v.starts_with("#version 300 es\n"));
        assert!(f.starts_with("#version 300 es\n"));
    }

    #[test]
    fn desktop_flavor_gets_330() {
        let mut d = TraceDevice::new(ContextFlavor::Desktop);
        ShaderProgram::build(&mut d, None).unwrap();
        assert!(sources(&d).0.starts_with("#version 330\n"));
    }

    #[test]
    fn override_wins() {
        let mut d = TraceDevice::new(ContextFlavor::Embedded);
        ShaderProgram::build(&mut d, Some("#version 310 es")).unwrap();
        assert!(sources(&d).0.starts_with("#version 310 es\n"));
    }

    #[test]
    fn resolves_uniforms() {
        let mut d = TraceDevice::default().without_uniform("normal");
        let p = ShaderProgram::build(&mut d, None).unwrap();
        assert_eq!(p.uniforms.projection.as_deref(), Some("projection"));
        assert_eq!(p.uniforms.model_view.as_deref(), Some("modelView"));
        assert!(p.uniforms.normal.is_none());
    }

    #[test]
    fn link_failure_carries_context() {
        let mut d = TraceDevice::default().failing_link("0:3: syntax error");
        let err = ShaderProgram::build(&mut d, None).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("failed to build immediate-mode program"));
        assert!(msg.contains("syntax error"));
    }
}
