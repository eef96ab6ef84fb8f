use crate::api as gl;
use autograph_caps::{CapabilitySnapshot, LimitId};

/// Implementation limits used by renderers, with fallbacks for the ones the snapshot lacks.
///
/// Fallbacks are the minimum values guaranteed by GL 3.x, except for `uniform_buffer_alignment`
/// which falls back to the largest alignment seen in practice.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ImplementationParameters {
    pub uniform_buffer_alignment: usize,
    pub max_draw_buffers: u32,
    pub max_color_attachments: u32,
    pub max_viewports: u32,
    pub max_texture_size: u32,
    pub max_viewport_dims: (u32, u32),
}

impl Default for ImplementationParameters {
    fn default() -> Self {
        ImplementationParameters {
            uniform_buffer_alignment: 256,
            max_draw_buffers: 1,
            max_color_attachments: 1,
            max_viewports: 1,
            max_texture_size: 1024,
            max_viewport_dims: (1024, 1024),
        }
    }
}

fn get_u32(snapshot: &CapabilitySnapshot, pname: u32, fallback: u32) -> u32 {
    match snapshot.get_int(LimitId(pname)) {
        Some(v) if v > 0 => v as u32,
        _ => {
            debug!("{}: using fallback value {}", LimitId(pname), fallback);
            fallback
        }
    }
}

impl ImplementationParameters {
    pub fn from_snapshot(snapshot: &CapabilitySnapshot) -> ImplementationParameters {
        let d = ImplementationParameters::default();

        let max_viewport_dims = match snapshot.get_int_array(LimitId(gl::MAX_VIEWPORT_DIMS)) {
            Some(&[w, h]) if w > 0 && h > 0 => (w as u32, h as u32),
            _ => d.max_viewport_dims,
        };

        ImplementationParameters {
            uniform_buffer_alignment: get_u32(
                snapshot,
                gl::UNIFORM_BUFFER_OFFSET_ALIGNMENT,
                d.uniform_buffer_alignment as u32,
            ) as usize,
            max_draw_buffers: get_u32(snapshot, gl::MAX_DRAW_BUFFERS, d.max_draw_buffers),
            max_color_attachments: get_u32(
                snapshot,
                gl::MAX_COLOR_ATTACHMENTS,
                d.max_color_attachments,
            ),
            max_viewports: get_u32(snapshot, gl::MAX_VIEWPORTS, d.max_viewports),
            max_texture_size: get_u32(snapshot, gl::MAX_TEXTURE_SIZE, d.max_texture_size),
            max_viewport_dims,
        }
    }
}
