//! Registry of the implementation limits of OpenGL, OpenGL ES and OpenGL SC.
//!
//! Each descriptor lists the core versions and extensions that expose the limit. The list is not
//! exhaustive: most per-stage limits of legacy (fixed-function) APIs are left out.
use crate::api as gl;
use autograph_caps::{Api, ApiSet, ProbeDescriptor, Requirement, Shape};

const GL_AND_GLES: ApiSet = ApiSet::from_bits_truncate(ApiSet::GL.bits() | ApiSet::GLES.bits());
const GL_AND_GLES1: ApiSet = ApiSet::from_bits_truncate(ApiSet::GL.bits() | ApiSet::GLES1.bits());

//--------------------------------------------------------------------------------------------------
// Requirements shared by several limits

const BASELINE: &[Requirement] = &[
    Requirement::version(Api::Gl, 1, 0),
    Requirement::version(Api::Gles1, 1, 0),
    Requirement::version(Api::Gles2, 2, 0),
    Requirement::version(Api::Glsc2, 2, 0),
];

const DRAW_RANGE_ELEMENTS: &[Requirement] = &[
    Requirement::version(Api::Gl, 1, 2),
    Requirement::version(Api::Gles2, 3, 0),
    Requirement::extension("GL_EXT_draw_range_elements"),
];

const COMPUTE_SHADER: &[Requirement] = &[
    Requirement::version(Api::Gl, 4, 3),
    Requirement::version(Api::Gles2, 3, 1),
    Requirement::extension_for("GL_ARB_compute_shader", ApiSet::GL),
];

const DEBUG: &[Requirement] = &[
    Requirement::version(Api::Gl, 4, 3),
    Requirement::version(Api::Gles2, 3, 2),
    Requirement::extension_for("GL_KHR_debug", GL_AND_GLES),
];

const VERTEX_ATTRIB_BINDING: &[Requirement] = &[
    Requirement::version(Api::Gl, 4, 3),
    Requirement::version(Api::Gles2, 3, 1),
    Requirement::extension_for("GL_ARB_vertex_attrib_binding", ApiSet::GL),
];

const CULL_DISTANCE: &[Requirement] = &[
    Requirement::version(Api::Gl, 4, 5),
    Requirement::extension_for("GL_ARB_cull_distance", ApiSet::GL),
];

const TESSELLATION_SHADER: &[Requirement] = &[
    Requirement::version(Api::Gl, 4, 0),
    Requirement::version(Api::Gles2, 3, 2),
    Requirement::extension_for("GL_ARB_tessellation_shader", ApiSet::GL),
    Requirement::extension_for("GL_EXT_tessellation_shader", ApiSet::GLES2),
    Requirement::extension_for("GL_OES_tessellation_shader", ApiSet::GLES2),
];

const GPU_SHADER4: &[Requirement] = &[
    Requirement::version(Api::Gl, 3, 0),
    Requirement::version(Api::Gles2, 3, 0),
    Requirement::extension("GL_EXT_gpu_shader4"),
    Requirement::extension("GL_NV_gpu_program4"),
];

const UNIFORM_BUFFER_OBJECT: &[Requirement] = &[
    Requirement::version(Api::Gl, 3, 1),
    Requirement::version(Api::Gles2, 3, 0),
    Requirement::extension_for("GL_ARB_uniform_buffer_object", ApiSet::GL),
];

const TRANSFORM_FEEDBACK: &[Requirement] = &[
    Requirement::version(Api::Gl, 3, 0),
    Requirement::version(Api::Gles2, 3, 0),
    Requirement::extension("GL_EXT_transform_feedback"),
    Requirement::extension("GL_NV_transform_feedback"),
];

const GEOMETRY_SHADER: &[Requirement] = &[
    Requirement::version(Api::Gl, 3, 2),
    Requirement::version(Api::Gles2, 3, 2),
    Requirement::extension_for("GL_ARB_geometry_shader4", ApiSet::GL),
    Requirement::extension_for("GL_EXT_geometry_shader", ApiSet::GLES2),
    Requirement::extension("GL_EXT_geometry_shader4"),
    Requirement::extension_for("GL_OES_geometry_shader", ApiSet::GLES2),
];

const SHADER_SUBROUTINE: &[Requirement] = &[
    Requirement::version(Api::Gl, 4, 0),
    Requirement::extension_for("GL_ARB_shader_subroutine", ApiSet::GL),
];

const ES2_COMPATIBILITY: &[Requirement] = &[
    Requirement::version(Api::Gl, 4, 1),
    Requirement::version(Api::Gles2, 2, 0),
    Requirement::version(Api::Glsc2, 2, 0),
    Requirement::extension_for("GL_ARB_ES2_compatibility", ApiSet::GL),
];

const MULTISAMPLE_INTERPOLATION: &[Requirement] = &[
    Requirement::version(Api::Gl, 4, 0),
    Requirement::version(Api::Gles2, 3, 2),
    Requirement::extension_for("GL_ARB_gpu_shader5", ApiSet::GL),
    Requirement::extension_for("GL_OES_shader_multisample_interpolation", ApiSet::GLES2),
    Requirement::extension("GL_NV_gpu_program5"),
];

const TEXTURE_GATHER: &[Requirement] = &[
    Requirement::version(Api::Gl, 4, 0),
    Requirement::version(Api::Gles2, 3, 1),
    Requirement::extension_for("GL_ARB_texture_gather", ApiSet::GL),
    Requirement::extension("GL_NV_gpu_program5"),
];

const IMAGE_LOAD_STORE: &[Requirement] = &[
    Requirement::version(Api::Gl, 4, 2),
    Requirement::version(Api::Gles2, 3, 1),
    Requirement::extension_for("GL_ARB_shader_image_load_store", ApiSet::GL),
];

const TESSELLATION_IMAGE_LOAD_STORE: &[Requirement] = &[
    Requirement::version(Api::Gl, 4, 2),
    Requirement::version(Api::Gles2, 3, 2),
    Requirement::extension_for("GL_ARB_shader_image_load_store", ApiSet::GL),
    Requirement::extension_for("GL_EXT_tessellation_shader", ApiSet::GLES2),
    Requirement::extension_for("GL_OES_tessellation_shader", ApiSet::GLES2),
];

const SHADER_STORAGE: &[Requirement] = &[
    Requirement::version(Api::Gl, 4, 3),
    Requirement::version(Api::Gles2, 3, 1),
    Requirement::extension_for("GL_ARB_shader_storage_buffer_object", ApiSet::GL),
];

const TESSELLATION_SHADER_STORAGE: &[Requirement] = &[
    Requirement::version(Api::Gl, 4, 3),
    Requirement::version(Api::Gles2, 3, 2),
    Requirement::extension_for("GL_ARB_shader_storage_buffer_object", ApiSet::GL),
    Requirement::extension_for("GL_EXT_tessellation_shader", ApiSet::GLES2),
    Requirement::extension_for("GL_OES_tessellation_shader", ApiSet::GLES2),
];

const TEXTURE_MULTISAMPLE: &[Requirement] = &[
    Requirement::version(Api::Gl, 3, 2),
    Requirement::version(Api::Gles2, 3, 1),
    Requirement::extension_for("GL_ARB_texture_multisample", ApiSet::GL),
];

const SHADER_INTERFACE: &[Requirement] = &[
    Requirement::version(Api::Gl, 3, 2),
    Requirement::version(Api::Gles2, 3, 0),
];

const GEOMETRY_SHADER_INTERFACE: &[Requirement] = &[
    Requirement::version(Api::Gl, 3, 2),
    Requirement::version(Api::Gles2, 3, 2),
    Requirement::extension_for("GL_EXT_geometry_shader", ApiSet::GLES2),
    Requirement::extension_for("GL_OES_geometry_shader", ApiSet::GLES2),
];

const DEBUG_OUTPUT: &[Requirement] = &[
    Requirement::version(Api::Gl, 4, 3),
    Requirement::version(Api::Gles2, 3, 2),
    Requirement::extension_for("GL_KHR_debug", GL_AND_GLES),
    Requirement::extension("GL_AMD_debug_output"),
    Requirement::extension_for("GL_ARB_debug_output", ApiSet::GL),
];

const ATOMIC_COUNTERS: &[Requirement] = &[
    Requirement::version(Api::Gl, 4, 2),
    Requirement::version(Api::Gles2, 3, 1),
    Requirement::extension_for("GL_ARB_shader_atomic_counters", ApiSet::GL),
];

const TESSELLATION_ATOMIC_COUNTERS: &[Requirement] = &[
    Requirement::version(Api::Gl, 4, 2),
    Requirement::version(Api::Gles2, 3, 2),
    Requirement::extension_for("GL_ARB_shader_atomic_counters", ApiSet::GL),
    Requirement::extension_for("GL_EXT_tessellation_shader", ApiSet::GLES2),
    Requirement::extension_for("GL_OES_tessellation_shader", ApiSet::GLES2),
];

const GEOMETRY_ATOMIC_COUNTERS: &[Requirement] = &[
    Requirement::version(Api::Gl, 4, 2),
    Requirement::version(Api::Gles2, 3, 2),
    Requirement::extension_for("GL_ARB_shader_atomic_counters", ApiSet::GL),
    Requirement::extension_for("GL_EXT_geometry_shader", ApiSet::GLES2),
    Requirement::extension_for("GL_OES_geometry_shader", ApiSet::GLES2),
];

const FRAMEBUFFER_NO_ATTACHMENTS: &[Requirement] = &[
    Requirement::version(Api::Gl, 4, 3),
    Requirement::version(Api::Gles2, 3, 1),
    Requirement::extension_for("GL_ARB_framebuffer_no_attachments", ApiSet::GL),
];

const DESKTOP_ONLY: &[Requirement] = &[
    Requirement::version(Api::Gl, 1, 0),
];

//--------------------------------------------------------------------------------------------------

/// All known limits.
pub static LIMITS: &[ProbeDescriptor] = &[
    // Strings
    ProbeDescriptor::new(gl::VENDOR, "VENDOR", Shape::String, BASELINE),
    ProbeDescriptor::new(gl::RENDERER, "RENDERER", Shape::String, BASELINE),
    ProbeDescriptor::new(gl::VERSION, "VERSION", Shape::String, BASELINE),
    ProbeDescriptor::new(
        gl::SHADING_LANGUAGE_VERSION,
        "SHADING_LANGUAGE_VERSION",
        Shape::String,
        &[
            Requirement::version(Api::Gl, 2, 0),
            Requirement::version(Api::Gles2, 2, 0),
            Requirement::version(Api::Glsc2, 2, 0),
            Requirement::extension("GL_ARB_shading_language_100"),
        ],
    ),
    // Limits
    ProbeDescriptor::new(
        gl::MAX_CLIP_DISTANCES,
        "MAX_CLIP_DISTANCES",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 3, 0),
            Requirement::extension_for("GL_APPLE_clip_distance", ApiSet::GLES2),
        ],
    ),
    ProbeDescriptor::new(gl::MAX_TEXTURE_SIZE, "MAX_TEXTURE_SIZE", Shape::Int, BASELINE),
    ProbeDescriptor::new(gl::MAX_VIEWPORT_DIMS, "MAX_VIEWPORT_DIMS", Shape::IntArray(2), BASELINE),
    ProbeDescriptor::new(
        gl::MAX_3D_TEXTURE_SIZE,
        "MAX_3D_TEXTURE_SIZE",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 1, 2),
            Requirement::version(Api::Gles2, 3, 0),
            Requirement::extension("GL_EXT_texture3D"),
            Requirement::extension_for("GL_OES_texture_3D", ApiSet::GLES2),
        ],
    ),
    ProbeDescriptor::new(
        gl::MAX_ELEMENTS_VERTICES,
        "MAX_ELEMENTS_VERTICES",
        Shape::Int,
        DRAW_RANGE_ELEMENTS,
    ),
    ProbeDescriptor::new(
        gl::MAX_ELEMENTS_INDICES,
        "MAX_ELEMENTS_INDICES",
        Shape::Int,
        DRAW_RANGE_ELEMENTS,
    ),
    ProbeDescriptor::new(
        gl::MAX_VIEWPORTS,
        "MAX_VIEWPORTS",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 4, 1),
            Requirement::extension_for("GL_ARB_viewport_array", ApiSet::GL),
            Requirement::extension_for("GL_NV_viewport_array", ApiSet::GLES2),
            Requirement::extension_for("GL_OES_viewport_array", ApiSet::GLES2),
        ],
    ),
    ProbeDescriptor::new(
        gl::MAX_COMPUTE_SHARED_MEMORY_SIZE,
        "MAX_COMPUTE_SHARED_MEMORY_SIZE",
        Shape::Int,
        COMPUTE_SHADER,
    ),
    ProbeDescriptor::new(
        gl::MAX_COMPUTE_UNIFORM_COMPONENTS,
        "MAX_COMPUTE_UNIFORM_COMPONENTS",
        Shape::Int,
        COMPUTE_SHADER,
    ),
    ProbeDescriptor::new(
        gl::MAX_COMPUTE_ATOMIC_COUNTER_BUFFERS,
        "MAX_COMPUTE_ATOMIC_COUNTER_BUFFERS",
        Shape::Int,
        COMPUTE_SHADER,
    ),
    ProbeDescriptor::new(
        gl::MAX_COMPUTE_ATOMIC_COUNTERS,
        "MAX_COMPUTE_ATOMIC_COUNTERS",
        Shape::Int,
        COMPUTE_SHADER,
    ),
    ProbeDescriptor::new(
        gl::MAX_COMBINED_COMPUTE_UNIFORM_COMPONENTS,
        "MAX_COMBINED_COMPUTE_UNIFORM_COMPONENTS",
        Shape::Int,
        COMPUTE_SHADER,
    ),
    ProbeDescriptor::new(
        gl::MAX_DEBUG_GROUP_STACK_DEPTH,
        "MAX_DEBUG_GROUP_STACK_DEPTH",
        Shape::Int,
        DEBUG,
    ),
    ProbeDescriptor::new(
        gl::MAX_UNIFORM_LOCATIONS,
        "MAX_UNIFORM_LOCATIONS",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 4, 3),
            Requirement::version(Api::Gles2, 3, 1),
            Requirement::extension_for("GL_ARB_explicit_uniform_location", ApiSet::GL),
        ],
    ),
    ProbeDescriptor::new(
        gl::MAX_VERTEX_ATTRIB_RELATIVE_OFFSET,
        "MAX_VERTEX_ATTRIB_RELATIVE_OFFSET",
        Shape::Int,
        VERTEX_ATTRIB_BINDING,
    ),
    ProbeDescriptor::new(
        gl::MAX_VERTEX_ATTRIB_BINDINGS,
        "MAX_VERTEX_ATTRIB_BINDINGS",
        Shape::Int,
        VERTEX_ATTRIB_BINDING,
    ),
    ProbeDescriptor::new(
        gl::MAX_VERTEX_ATTRIB_STRIDE,
        "MAX_VERTEX_ATTRIB_STRIDE",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 4, 4),
            Requirement::version(Api::Gles2, 3, 1),
        ],
    ),
    ProbeDescriptor::new(gl::MAX_LABEL_LENGTH, "MAX_LABEL_LENGTH", Shape::Int, DEBUG),
    ProbeDescriptor::new(gl::MAX_CULL_DISTANCES, "MAX_CULL_DISTANCES", Shape::Int, CULL_DISTANCE),
    ProbeDescriptor::new(
        gl::MAX_COMBINED_CLIP_AND_CULL_DISTANCES,
        "MAX_COMBINED_CLIP_AND_CULL_DISTANCES",
        Shape::Int,
        CULL_DISTANCE,
    ),
    ProbeDescriptor::new(
        gl::MAX_RENDERBUFFER_SIZE,
        "MAX_RENDERBUFFER_SIZE",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 3, 0),
            Requirement::version(Api::Gles2, 2, 0),
            Requirement::version(Api::Glsc2, 2, 0),
            Requirement::extension_for("GL_ARB_framebuffer_object", ApiSet::GL),
            Requirement::extension("GL_EXT_framebuffer_object"),
            Requirement::extension_for("GL_OES_framebuffer_object", ApiSet::GLES1),
        ],
    ),
    ProbeDescriptor::new(
        gl::MAX_RECTANGLE_TEXTURE_SIZE,
        "MAX_RECTANGLE_TEXTURE_SIZE",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 3, 1),
            Requirement::extension("GL_ARB_texture_rectangle"),
            Requirement::extension("GL_NV_texture_rectangle"),
        ],
    ),
    ProbeDescriptor::new(
        gl::MAX_TEXTURE_LOD_BIAS,
        "MAX_TEXTURE_LOD_BIAS",
        Shape::Float,
        &[
            Requirement::version(Api::Gl, 1, 4),
            Requirement::version(Api::Gles2, 3, 0),
            Requirement::extension_for("GL_EXT_texture_lod_bias", GL_AND_GLES1),
        ],
    ),
    ProbeDescriptor::new(
        gl::MAX_TEXTURE_MAX_ANISOTROPY,
        "MAX_TEXTURE_MAX_ANISOTROPY",
        Shape::Float,
        &[
            Requirement::version(Api::Gl, 4, 6),
            Requirement::extension_for("GL_ARB_texture_filter_anisotropic", ApiSet::GL),
        ],
    ),
    ProbeDescriptor::new(
        gl::MAX_CUBE_MAP_TEXTURE_SIZE,
        "MAX_CUBE_MAP_TEXTURE_SIZE",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 1, 3),
            Requirement::version(Api::Gles2, 2, 0),
            Requirement::extension("GL_ARB_texture_cube_map"),
            Requirement::extension("GL_EXT_texture_cube_map"),
            Requirement::extension_for("GL_OES_texture_cube_map", ApiSet::GLES1),
        ],
    ),
    ProbeDescriptor::new(
        gl::MAX_DRAW_BUFFERS,
        "MAX_DRAW_BUFFERS",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 2, 0),
            Requirement::version(Api::Gles2, 3, 0),
            Requirement::extension("GL_ARB_draw_buffers"),
            Requirement::extension("GL_ATI_draw_buffers"),
            Requirement::extension_for("GL_EXT_draw_buffers", ApiSet::GLES2),
            Requirement::extension_for("GL_NV_draw_buffers", ApiSet::GLES2),
        ],
    ),
    ProbeDescriptor::new(
        gl::MAX_VERTEX_ATTRIBS,
        "MAX_VERTEX_ATTRIBS",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 2, 0),
            Requirement::version(Api::Gles2, 2, 0),
            Requirement::version(Api::Glsc2, 2, 0),
            Requirement::extension("GL_ARB_vertex_program"),
            Requirement::extension("GL_ARB_vertex_shader"),
        ],
    ),
    ProbeDescriptor::new(
        gl::MAX_TESS_CONTROL_INPUT_COMPONENTS,
        "MAX_TESS_CONTROL_INPUT_COMPONENTS",
        Shape::Int,
        TESSELLATION_SHADER,
    ),
    ProbeDescriptor::new(
        gl::MAX_TESS_EVALUATION_INPUT_COMPONENTS,
        "MAX_TESS_EVALUATION_INPUT_COMPONENTS",
        Shape::Int,
        TESSELLATION_SHADER,
    ),
    ProbeDescriptor::new(
        gl::MAX_TEXTURE_IMAGE_UNITS,
        "MAX_TEXTURE_IMAGE_UNITS",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 2, 0),
            Requirement::version(Api::Gles2, 2, 0),
            Requirement::version(Api::Glsc2, 2, 0),
            Requirement::extension("GL_ARB_fragment_program"),
            Requirement::extension("GL_ARB_vertex_shader"),
            Requirement::extension("GL_NV_fragment_program"),
        ],
    ),
    ProbeDescriptor::new(
        gl::MAX_DUAL_SOURCE_DRAW_BUFFERS,
        "MAX_DUAL_SOURCE_DRAW_BUFFERS",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 3, 3),
            Requirement::extension_for("GL_ARB_blend_func_extended", ApiSet::GL),
            Requirement::extension_for("GL_EXT_blend_func_extended", ApiSet::GLES2),
        ],
    ),
    ProbeDescriptor::new(
        gl::MAX_ARRAY_TEXTURE_LAYERS,
        "MAX_ARRAY_TEXTURE_LAYERS",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 3, 0),
            Requirement::version(Api::Gles2, 3, 0),
            Requirement::extension("GL_EXT_texture_array"),
        ],
    ),
    ProbeDescriptor::new(
        gl::MIN_PROGRAM_TEXEL_OFFSET,
        "MIN_PROGRAM_TEXEL_OFFSET",
        Shape::Int,
        GPU_SHADER4,
    ),
    ProbeDescriptor::new(
        gl::MAX_PROGRAM_TEXEL_OFFSET,
        "MAX_PROGRAM_TEXEL_OFFSET",
        Shape::Int,
        GPU_SHADER4,
    ),
    ProbeDescriptor::new(
        gl::MAX_VERTEX_UNIFORM_BLOCKS,
        "MAX_VERTEX_UNIFORM_BLOCKS",
        Shape::Int,
        UNIFORM_BUFFER_OBJECT,
    ),
    ProbeDescriptor::new(
        gl::MAX_FRAGMENT_UNIFORM_BLOCKS,
        "MAX_FRAGMENT_UNIFORM_BLOCKS",
        Shape::Int,
        UNIFORM_BUFFER_OBJECT,
    ),
    ProbeDescriptor::new(
        gl::MAX_COMBINED_UNIFORM_BLOCKS,
        "MAX_COMBINED_UNIFORM_BLOCKS",
        Shape::Int,
        UNIFORM_BUFFER_OBJECT,
    ),
    ProbeDescriptor::new(
        gl::MAX_UNIFORM_BUFFER_BINDINGS,
        "MAX_UNIFORM_BUFFER_BINDINGS",
        Shape::Int,
        UNIFORM_BUFFER_OBJECT,
    ),
    ProbeDescriptor::new(
        gl::MAX_UNIFORM_BLOCK_SIZE,
        "MAX_UNIFORM_BLOCK_SIZE",
        Shape::Int,
        UNIFORM_BUFFER_OBJECT,
    ),
    ProbeDescriptor::new(
        gl::MAX_COMBINED_VERTEX_UNIFORM_COMPONENTS,
        "MAX_COMBINED_VERTEX_UNIFORM_COMPONENTS",
        Shape::Int,
        UNIFORM_BUFFER_OBJECT,
    ),
    ProbeDescriptor::new(
        gl::MAX_COMBINED_FRAGMENT_UNIFORM_COMPONENTS,
        "MAX_COMBINED_FRAGMENT_UNIFORM_COMPONENTS",
        Shape::Int,
        UNIFORM_BUFFER_OBJECT,
    ),
    ProbeDescriptor::new(
        gl::MAX_FRAGMENT_UNIFORM_COMPONENTS,
        "MAX_FRAGMENT_UNIFORM_COMPONENTS",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 2, 0),
            Requirement::version(Api::Gles2, 3, 0),
            Requirement::extension("GL_ARB_fragment_shader"),
        ],
    ),
    ProbeDescriptor::new(
        gl::MAX_VERTEX_UNIFORM_COMPONENTS,
        "MAX_VERTEX_UNIFORM_COMPONENTS",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 2, 0),
            Requirement::version(Api::Gles2, 3, 0),
            Requirement::extension("GL_ARB_vertex_shader"),
        ],
    ),
    ProbeDescriptor::new(
        gl::MAX_VERTEX_TEXTURE_IMAGE_UNITS,
        "MAX_VERTEX_TEXTURE_IMAGE_UNITS",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 2, 0),
            Requirement::version(Api::Gles2, 2, 0),
            Requirement::version(Api::Glsc2, 2, 0),
            Requirement::extension("GL_ARB_vertex_shader"),
            Requirement::extension("GL_NV_vertex_program3"),
        ],
    ),
    ProbeDescriptor::new(
        gl::MAX_COMBINED_TEXTURE_IMAGE_UNITS,
        "MAX_COMBINED_TEXTURE_IMAGE_UNITS",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 2, 0),
            Requirement::version(Api::Gles2, 2, 0),
            Requirement::version(Api::Glsc2, 2, 0),
            Requirement::extension("GL_ARB_vertex_shader"),
        ],
    ),
    ProbeDescriptor::new(
        gl::MAX_GEOMETRY_TEXTURE_IMAGE_UNITS,
        "MAX_GEOMETRY_TEXTURE_IMAGE_UNITS",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 3, 2),
            Requirement::version(Api::Gles2, 3, 2),
            Requirement::extension_for("GL_ARB_geometry_shader4", ApiSet::GL),
            Requirement::extension_for("GL_EXT_geometry_shader", ApiSet::GLES2),
            Requirement::extension("GL_EXT_geometry_shader4"),
            Requirement::extension("GL_NV_geometry_program4"),
            Requirement::extension_for("GL_OES_geometry_shader", ApiSet::GLES2),
        ],
    ),
    ProbeDescriptor::new(
        gl::MAX_TEXTURE_BUFFER_SIZE,
        "MAX_TEXTURE_BUFFER_SIZE",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 3, 1),
            Requirement::version(Api::Gles2, 3, 2),
            Requirement::extension_for("GL_ARB_texture_buffer_object", ApiSet::GL),
            Requirement::extension_for("GL_EXT_texture_buffer", ApiSet::GLES2),
            Requirement::extension("GL_EXT_texture_buffer_object"),
            Requirement::extension_for("GL_OES_texture_buffer", ApiSet::GLES2),
        ],
    ),
    ProbeDescriptor::new(
        gl::MIN_SAMPLE_SHADING_VALUE,
        "MIN_SAMPLE_SHADING_VALUE",
        Shape::Float,
        &[
            Requirement::version(Api::Gl, 4, 0),
            Requirement::version(Api::Gles2, 3, 2),
            Requirement::extension_for("GL_ARB_sample_shading", ApiSet::GL),
            Requirement::extension_for("GL_OES_sample_shading", ApiSet::GLES2),
        ],
    ),
    ProbeDescriptor::new(
        gl::MAX_TRANSFORM_FEEDBACK_SEPARATE_COMPONENTS,
        "MAX_TRANSFORM_FEEDBACK_SEPARATE_COMPONENTS",
        Shape::Int,
        TRANSFORM_FEEDBACK,
    ),
    ProbeDescriptor::new(
        gl::MAX_TRANSFORM_FEEDBACK_INTERLEAVED_COMPONENTS,
        "MAX_TRANSFORM_FEEDBACK_INTERLEAVED_COMPONENTS",
        Shape::Int,
        TRANSFORM_FEEDBACK,
    ),
    ProbeDescriptor::new(
        gl::MAX_TRANSFORM_FEEDBACK_SEPARATE_ATTRIBS,
        "MAX_TRANSFORM_FEEDBACK_SEPARATE_ATTRIBS",
        Shape::Int,
        TRANSFORM_FEEDBACK,
    ),
    ProbeDescriptor::new(
        gl::MAX_COLOR_ATTACHMENTS,
        "MAX_COLOR_ATTACHMENTS",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 3, 0),
            Requirement::version(Api::Gles2, 3, 0),
            Requirement::extension_for("GL_ARB_framebuffer_object", ApiSet::GL),
            Requirement::extension_for("GL_EXT_draw_buffers", ApiSet::GLES2),
            Requirement::extension("GL_EXT_framebuffer_object"),
            Requirement::extension_for("GL_NV_fbo_color_attachments", ApiSet::GLES2),
        ],
    ),
    ProbeDescriptor::new(
        gl::MAX_SAMPLES,
        "MAX_SAMPLES",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 3, 0),
            Requirement::version(Api::Gles2, 3, 0),
            Requirement::extension_for("GL_ARB_framebuffer_object", ApiSet::GL),
            Requirement::extension_for("GL_ANGLE_framebuffer_multisample", ApiSet::GLES2),
            Requirement::extension_for("GL_APPLE_framebuffer_multisample", ApiSet::GLES),
            Requirement::extension("GL_EXT_framebuffer_multisample"),
            Requirement::extension_for("GL_EXT_multisampled_render_to_texture", ApiSet::GLES),
            Requirement::extension_for("GL_NV_framebuffer_multisample", ApiSet::GLES2),
        ],
    ),
    ProbeDescriptor::new(
        gl::MAX_ELEMENT_INDEX,
        "MAX_ELEMENT_INDEX",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 4, 3),
            Requirement::version(Api::Gles2, 3, 0),
            Requirement::extension_for("GL_ARB_ES3_compatibility", ApiSet::GL),
        ],
    ),
    ProbeDescriptor::new(
        gl::MAX_GEOMETRY_UNIFORM_COMPONENTS,
        "MAX_GEOMETRY_UNIFORM_COMPONENTS",
        Shape::Int,
        GEOMETRY_SHADER,
    ),
    ProbeDescriptor::new(
        gl::MAX_GEOMETRY_OUTPUT_VERTICES,
        "MAX_GEOMETRY_OUTPUT_VERTICES",
        Shape::Int,
        GEOMETRY_SHADER,
    ),
    ProbeDescriptor::new(
        gl::MAX_GEOMETRY_TOTAL_OUTPUT_COMPONENTS,
        "MAX_GEOMETRY_TOTAL_OUTPUT_COMPONENTS",
        Shape::Int,
        GEOMETRY_SHADER,
    ),
    ProbeDescriptor::new(gl::MAX_SUBROUTINES, "MAX_SUBROUTINES", Shape::Int, SHADER_SUBROUTINE),
    ProbeDescriptor::new(
        gl::MAX_SUBROUTINE_UNIFORM_LOCATIONS,
        "MAX_SUBROUTINE_UNIFORM_LOCATIONS",
        Shape::Int,
        SHADER_SUBROUTINE,
    ),
    ProbeDescriptor::new(
        gl::MAX_VERTEX_UNIFORM_VECTORS,
        "MAX_VERTEX_UNIFORM_VECTORS",
        Shape::Int,
        ES2_COMPATIBILITY,
    ),
    ProbeDescriptor::new(
        gl::MAX_VARYING_VECTORS,
        "MAX_VARYING_VECTORS",
        Shape::Int,
        ES2_COMPATIBILITY,
    ),
    ProbeDescriptor::new(
        gl::MAX_FRAGMENT_UNIFORM_VECTORS,
        "MAX_FRAGMENT_UNIFORM_VECTORS",
        Shape::Int,
        ES2_COMPATIBILITY,
    ),
    ProbeDescriptor::new(
        gl::MAX_COMBINED_TESS_CONTROL_UNIFORM_COMPONENTS,
        "MAX_COMBINED_TESS_CONTROL_UNIFORM_COMPONENTS",
        Shape::Int,
        TESSELLATION_SHADER,
    ),
    ProbeDescriptor::new(
        gl::MAX_COMBINED_TESS_EVALUATION_UNIFORM_COMPONENTS,
        "MAX_COMBINED_TESS_EVALUATION_UNIFORM_COMPONENTS",
        Shape::Int,
        TESSELLATION_SHADER,
    ),
    ProbeDescriptor::new(
        gl::MAX_SAMPLE_MASK_WORDS,
        "MAX_SAMPLE_MASK_WORDS",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 3, 2),
            Requirement::version(Api::Gles2, 3, 1),
            Requirement::extension_for("GL_ARB_texture_multisample", ApiSet::GL),
            Requirement::extension("GL_NV_explicit_multisample"),
        ],
    ),
    ProbeDescriptor::new(
        gl::MAX_GEOMETRY_SHADER_INVOCATIONS,
        "MAX_GEOMETRY_SHADER_INVOCATIONS",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 4, 0),
            Requirement::version(Api::Gles2, 3, 2),
            Requirement::extension_for("GL_ARB_gpu_shader5", ApiSet::GL),
            Requirement::extension_for("GL_EXT_geometry_shader", ApiSet::GLES2),
            Requirement::extension_for("GL_OES_geometry_shader", ApiSet::GLES2),
        ],
    ),
    ProbeDescriptor::new(
        gl::MIN_FRAGMENT_INTERPOLATION_OFFSET,
        "MIN_FRAGMENT_INTERPOLATION_OFFSET",
        Shape::Float,
        MULTISAMPLE_INTERPOLATION,
    ),
    ProbeDescriptor::new(
        gl::MAX_FRAGMENT_INTERPOLATION_OFFSET,
        "MAX_FRAGMENT_INTERPOLATION_OFFSET",
        Shape::Float,
        MULTISAMPLE_INTERPOLATION,
    ),
    ProbeDescriptor::new(
        gl::MIN_PROGRAM_TEXTURE_GATHER_OFFSET,
        "MIN_PROGRAM_TEXTURE_GATHER_OFFSET",
        Shape::Int,
        TEXTURE_GATHER,
    ),
    ProbeDescriptor::new(
        gl::MAX_PROGRAM_TEXTURE_GATHER_OFFSET,
        "MAX_PROGRAM_TEXTURE_GATHER_OFFSET",
        Shape::Int,
        TEXTURE_GATHER,
    ),
    ProbeDescriptor::new(
        gl::MAX_TRANSFORM_FEEDBACK_BUFFERS,
        "MAX_TRANSFORM_FEEDBACK_BUFFERS",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 4, 0),
            Requirement::extension_for("GL_ARB_transform_feedback3", ApiSet::GL),
        ],
    ),
    ProbeDescriptor::new(
        gl::MAX_VERTEX_STREAMS,
        "MAX_VERTEX_STREAMS",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 4, 0),
            Requirement::extension_for("GL_ARB_gpu_shader5", ApiSet::GL),
            Requirement::extension_for("GL_ARB_transform_feedback3", ApiSet::GL),
        ],
    ),
    ProbeDescriptor::new(
        gl::MAX_PATCH_VERTICES,
        "MAX_PATCH_VERTICES",
        Shape::Int,
        TESSELLATION_SHADER,
    ),
    ProbeDescriptor::new(
        gl::MAX_TESS_GEN_LEVEL,
        "MAX_TESS_GEN_LEVEL",
        Shape::Int,
        TESSELLATION_SHADER,
    ),
    ProbeDescriptor::new(
        gl::MAX_TESS_CONTROL_UNIFORM_COMPONENTS,
        "MAX_TESS_CONTROL_UNIFORM_COMPONENTS",
        Shape::Int,
        TESSELLATION_SHADER,
    ),
    ProbeDescriptor::new(
        gl::MAX_TESS_EVALUATION_UNIFORM_COMPONENTS,
        "MAX_TESS_EVALUATION_UNIFORM_COMPONENTS",
        Shape::Int,
        TESSELLATION_SHADER,
    ),
    ProbeDescriptor::new(
        gl::MAX_TESS_CONTROL_TEXTURE_IMAGE_UNITS,
        "MAX_TESS_CONTROL_TEXTURE_IMAGE_UNITS",
        Shape::Int,
        TESSELLATION_SHADER,
    ),
    ProbeDescriptor::new(
        gl::MAX_TESS_EVALUATION_TEXTURE_IMAGE_UNITS,
        "MAX_TESS_EVALUATION_TEXTURE_IMAGE_UNITS",
        Shape::Int,
        TESSELLATION_SHADER,
    ),
    ProbeDescriptor::new(
        gl::MAX_TESS_CONTROL_OUTPUT_COMPONENTS,
        "MAX_TESS_CONTROL_OUTPUT_COMPONENTS",
        Shape::Int,
        TESSELLATION_SHADER,
    ),
    ProbeDescriptor::new(
        gl::MAX_TESS_PATCH_COMPONENTS,
        "MAX_TESS_PATCH_COMPONENTS",
        Shape::Int,
        TESSELLATION_SHADER,
    ),
    ProbeDescriptor::new(
        gl::MAX_TESS_CONTROL_TOTAL_OUTPUT_COMPONENTS,
        "MAX_TESS_CONTROL_TOTAL_OUTPUT_COMPONENTS",
        Shape::Int,
        TESSELLATION_SHADER,
    ),
    ProbeDescriptor::new(
        gl::MAX_TESS_EVALUATION_OUTPUT_COMPONENTS,
        "MAX_TESS_EVALUATION_OUTPUT_COMPONENTS",
        Shape::Int,
        TESSELLATION_SHADER,
    ),
    ProbeDescriptor::new(
        gl::MAX_TESS_CONTROL_UNIFORM_BLOCKS,
        "MAX_TESS_CONTROL_UNIFORM_BLOCKS",
        Shape::Int,
        TESSELLATION_SHADER,
    ),
    ProbeDescriptor::new(
        gl::MAX_TESS_EVALUATION_UNIFORM_BLOCKS,
        "MAX_TESS_EVALUATION_UNIFORM_BLOCKS",
        Shape::Int,
        TESSELLATION_SHADER,
    ),
    ProbeDescriptor::new(
        gl::MAX_IMAGE_UNITS,
        "MAX_IMAGE_UNITS",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 4, 2),
            Requirement::version(Api::Gles2, 3, 1),
            Requirement::extension_for("GL_ARB_shader_image_load_store", ApiSet::GL),
            Requirement::extension("GL_EXT_shader_image_load_store"),
        ],
    ),
    ProbeDescriptor::new(
        gl::MAX_COMBINED_IMAGE_UNITS_AND_FRAGMENT_OUTPUTS,
        "MAX_COMBINED_IMAGE_UNITS_AND_FRAGMENT_OUTPUTS",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 4, 2),
            Requirement::extension_for("GL_ARB_shader_image_load_store", ApiSet::GL),
            Requirement::extension_for("GL_ARB_shader_storage_buffer_object", ApiSet::GL),
            Requirement::extension("GL_EXT_shader_image_load_store"),
        ],
    ),
    ProbeDescriptor::new(
        gl::MAX_IMAGE_SAMPLES,
        "MAX_IMAGE_SAMPLES",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 4, 2),
            Requirement::extension_for("GL_ARB_shader_image_load_store", ApiSet::GL),
            Requirement::extension("GL_EXT_shader_image_load_store"),
        ],
    ),
    ProbeDescriptor::new(
        gl::MIN_MAP_BUFFER_ALIGNMENT,
        "MIN_MAP_BUFFER_ALIGNMENT",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 4, 2),
            Requirement::extension_for("GL_ARB_map_buffer_alignment", ApiSet::GL),
        ],
    ),
    ProbeDescriptor::new(
        gl::MAX_VERTEX_IMAGE_UNIFORMS,
        "MAX_VERTEX_IMAGE_UNIFORMS",
        Shape::Int,
        IMAGE_LOAD_STORE,
    ),
    ProbeDescriptor::new(
        gl::MAX_TESS_CONTROL_IMAGE_UNIFORMS,
        "MAX_TESS_CONTROL_IMAGE_UNIFORMS",
        Shape::Int,
        TESSELLATION_IMAGE_LOAD_STORE,
    ),
    ProbeDescriptor::new(
        gl::MAX_TESS_EVALUATION_IMAGE_UNIFORMS,
        "MAX_TESS_EVALUATION_IMAGE_UNIFORMS",
        Shape::Int,
        TESSELLATION_IMAGE_LOAD_STORE,
    ),
    ProbeDescriptor::new(
        gl::MAX_GEOMETRY_IMAGE_UNIFORMS,
        "MAX_GEOMETRY_IMAGE_UNIFORMS",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 4, 2),
            Requirement::version(Api::Gles2, 3, 2),
            Requirement::extension_for("GL_ARB_shader_image_load_store", ApiSet::GL),
            Requirement::extension_for("GL_EXT_geometry_shader", ApiSet::GLES2),
            Requirement::extension_for("GL_OES_geometry_shader", ApiSet::GLES2),
        ],
    ),
    ProbeDescriptor::new(
        gl::MAX_FRAGMENT_IMAGE_UNIFORMS,
        "MAX_FRAGMENT_IMAGE_UNIFORMS",
        Shape::Int,
        IMAGE_LOAD_STORE,
    ),
    ProbeDescriptor::new(
        gl::MAX_COMBINED_IMAGE_UNIFORMS,
        "MAX_COMBINED_IMAGE_UNIFORMS",
        Shape::Int,
        IMAGE_LOAD_STORE,
    ),
    ProbeDescriptor::new(
        gl::MAX_VERTEX_SHADER_STORAGE_BLOCKS,
        "MAX_VERTEX_SHADER_STORAGE_BLOCKS",
        Shape::Int,
        SHADER_STORAGE,
    ),
    ProbeDescriptor::new(
        gl::MAX_GEOMETRY_SHADER_STORAGE_BLOCKS,
        "MAX_GEOMETRY_SHADER_STORAGE_BLOCKS",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 4, 3),
            Requirement::version(Api::Gles2, 3, 2),
            Requirement::extension_for("GL_ARB_shader_storage_buffer_object", ApiSet::GL),
            Requirement::extension_for("GL_EXT_geometry_shader", ApiSet::GLES2),
            Requirement::extension_for("GL_OES_geometry_shader", ApiSet::GLES2),
        ],
    ),
    ProbeDescriptor::new(
        gl::MAX_TESS_CONTROL_SHADER_STORAGE_BLOCKS,
        "MAX_TESS_CONTROL_SHADER_STORAGE_BLOCKS",
        Shape::Int,
        TESSELLATION_SHADER_STORAGE,
    ),
    ProbeDescriptor::new(
        gl::MAX_TESS_EVALUATION_SHADER_STORAGE_BLOCKS,
        "MAX_TESS_EVALUATION_SHADER_STORAGE_BLOCKS",
        Shape::Int,
        TESSELLATION_SHADER_STORAGE,
    ),
    ProbeDescriptor::new(
        gl::MAX_FRAGMENT_SHADER_STORAGE_BLOCKS,
        "MAX_FRAGMENT_SHADER_STORAGE_BLOCKS",
        Shape::Int,
        SHADER_STORAGE,
    ),
    ProbeDescriptor::new(
        gl::MAX_COMPUTE_SHADER_STORAGE_BLOCKS,
        "MAX_COMPUTE_SHADER_STORAGE_BLOCKS",
        Shape::Int,
        SHADER_STORAGE,
    ),
    ProbeDescriptor::new(
        gl::MAX_COMBINED_SHADER_STORAGE_BLOCKS,
        "MAX_COMBINED_SHADER_STORAGE_BLOCKS",
        Shape::Int,
        SHADER_STORAGE,
    ),
    ProbeDescriptor::new(
        gl::MAX_SHADER_STORAGE_BUFFER_BINDINGS,
        "MAX_SHADER_STORAGE_BUFFER_BINDINGS",
        Shape::Int,
        SHADER_STORAGE,
    ),
    ProbeDescriptor::new(
        gl::MAX_SHADER_STORAGE_BLOCK_SIZE,
        "MAX_SHADER_STORAGE_BLOCK_SIZE",
        Shape::Int,
        SHADER_STORAGE,
    ),
    ProbeDescriptor::new(
        gl::MAX_COMPUTE_WORK_GROUP_INVOCATIONS,
        "MAX_COMPUTE_WORK_GROUP_INVOCATIONS",
        Shape::Int,
        COMPUTE_SHADER,
    ),
    ProbeDescriptor::new(
        gl::MAX_COLOR_TEXTURE_SAMPLES,
        "MAX_COLOR_TEXTURE_SAMPLES",
        Shape::Int,
        TEXTURE_MULTISAMPLE,
    ),
    ProbeDescriptor::new(
        gl::MAX_INTEGER_SAMPLES,
        "MAX_INTEGER_SAMPLES",
        Shape::Int,
        TEXTURE_MULTISAMPLE,
    ),
    ProbeDescriptor::new(
        gl::MAX_SERVER_WAIT_TIMEOUT,
        "MAX_SERVER_WAIT_TIMEOUT",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 3, 2),
            Requirement::version(Api::Gles2, 3, 0),
            Requirement::extension_for("GL_ARB_sync", ApiSet::GL),
            Requirement::extension_for("GL_APPLE_sync", ApiSet::GLES),
        ],
    ),
    ProbeDescriptor::new(
        gl::MAX_VERTEX_OUTPUT_COMPONENTS,
        "MAX_VERTEX_OUTPUT_COMPONENTS",
        Shape::Int,
        SHADER_INTERFACE,
    ),
    ProbeDescriptor::new(
        gl::MAX_GEOMETRY_INPUT_COMPONENTS,
        "MAX_GEOMETRY_INPUT_COMPONENTS",
        Shape::Int,
        GEOMETRY_SHADER_INTERFACE,
    ),
    ProbeDescriptor::new(
        gl::MAX_GEOMETRY_OUTPUT_COMPONENTS,
        "MAX_GEOMETRY_OUTPUT_COMPONENTS",
        Shape::Int,
        GEOMETRY_SHADER_INTERFACE,
    ),
    ProbeDescriptor::new(
        gl::MAX_FRAGMENT_INPUT_COMPONENTS,
        "MAX_FRAGMENT_INPUT_COMPONENTS",
        Shape::Int,
        SHADER_INTERFACE,
    ),
    ProbeDescriptor::new(
        gl::MAX_DEBUG_MESSAGE_LENGTH,
        "MAX_DEBUG_MESSAGE_LENGTH",
        Shape::Int,
        DEBUG_OUTPUT,
    ),
    ProbeDescriptor::new(
        gl::MAX_DEBUG_LOGGED_MESSAGES,
        "MAX_DEBUG_LOGGED_MESSAGES",
        Shape::Int,
        DEBUG_OUTPUT,
    ),
    ProbeDescriptor::new(
        gl::MAX_COMPUTE_UNIFORM_BLOCKS,
        "MAX_COMPUTE_UNIFORM_BLOCKS",
        Shape::Int,
        COMPUTE_SHADER,
    ),
    ProbeDescriptor::new(
        gl::MAX_COMPUTE_TEXTURE_IMAGE_UNITS,
        "MAX_COMPUTE_TEXTURE_IMAGE_UNITS",
        Shape::Int,
        COMPUTE_SHADER,
    ),
    ProbeDescriptor::new(
        gl::MAX_COMPUTE_IMAGE_UNIFORMS,
        "MAX_COMPUTE_IMAGE_UNIFORMS",
        Shape::Int,
        COMPUTE_SHADER,
    ),
    ProbeDescriptor::new(
        gl::MAX_VERTEX_ATOMIC_COUNTER_BUFFERS,
        "MAX_VERTEX_ATOMIC_COUNTER_BUFFERS",
        Shape::Int,
        ATOMIC_COUNTERS,
    ),
    ProbeDescriptor::new(
        gl::MAX_TESS_CONTROL_ATOMIC_COUNTER_BUFFERS,
        "MAX_TESS_CONTROL_ATOMIC_COUNTER_BUFFERS",
        Shape::Int,
        TESSELLATION_ATOMIC_COUNTERS,
    ),
    ProbeDescriptor::new(
        gl::MAX_TESS_EVALUATION_ATOMIC_COUNTER_BUFFERS,
        "MAX_TESS_EVALUATION_ATOMIC_COUNTER_BUFFERS",
        Shape::Int,
        TESSELLATION_ATOMIC_COUNTERS,
    ),
    ProbeDescriptor::new(
        gl::MAX_GEOMETRY_ATOMIC_COUNTER_BUFFERS,
        "MAX_GEOMETRY_ATOMIC_COUNTER_BUFFERS",
        Shape::Int,
        GEOMETRY_ATOMIC_COUNTERS,
    ),
    ProbeDescriptor::new(
        gl::MAX_FRAGMENT_ATOMIC_COUNTER_BUFFERS,
        "MAX_FRAGMENT_ATOMIC_COUNTER_BUFFERS",
        Shape::Int,
        ATOMIC_COUNTERS,
    ),
    ProbeDescriptor::new(
        gl::MAX_COMBINED_ATOMIC_COUNTER_BUFFERS,
        "MAX_COMBINED_ATOMIC_COUNTER_BUFFERS",
        Shape::Int,
        ATOMIC_COUNTERS,
    ),
    ProbeDescriptor::new(
        gl::MAX_VERTEX_ATOMIC_COUNTERS,
        "MAX_VERTEX_ATOMIC_COUNTERS",
        Shape::Int,
        ATOMIC_COUNTERS,
    ),
    ProbeDescriptor::new(
        gl::MAX_TESS_CONTROL_ATOMIC_COUNTERS,
        "MAX_TESS_CONTROL_ATOMIC_COUNTERS",
        Shape::Int,
        TESSELLATION_ATOMIC_COUNTERS,
    ),
    ProbeDescriptor::new(
        gl::MAX_TESS_EVALUATION_ATOMIC_COUNTERS,
        "MAX_TESS_EVALUATION_ATOMIC_COUNTERS",
        Shape::Int,
        TESSELLATION_ATOMIC_COUNTERS,
    ),
    ProbeDescriptor::new(
        gl::MAX_GEOMETRY_ATOMIC_COUNTERS,
        "MAX_GEOMETRY_ATOMIC_COUNTERS",
        Shape::Int,
        GEOMETRY_ATOMIC_COUNTERS,
    ),
    ProbeDescriptor::new(
        gl::MAX_FRAGMENT_ATOMIC_COUNTERS,
        "MAX_FRAGMENT_ATOMIC_COUNTERS",
        Shape::Int,
        ATOMIC_COUNTERS,
    ),
    ProbeDescriptor::new(
        gl::MAX_COMBINED_ATOMIC_COUNTERS,
        "MAX_COMBINED_ATOMIC_COUNTERS",
        Shape::Int,
        ATOMIC_COUNTERS,
    ),
    ProbeDescriptor::new(
        gl::MAX_ATOMIC_COUNTER_BUFFER_SIZE,
        "MAX_ATOMIC_COUNTER_BUFFER_SIZE",
        Shape::Int,
        ATOMIC_COUNTERS,
    ),
    ProbeDescriptor::new(
        gl::MAX_ATOMIC_COUNTER_BUFFER_BINDINGS,
        "MAX_ATOMIC_COUNTER_BUFFER_BINDINGS",
        Shape::Int,
        ATOMIC_COUNTERS,
    ),
    ProbeDescriptor::new(
        gl::MAX_FRAMEBUFFER_WIDTH,
        "MAX_FRAMEBUFFER_WIDTH",
        Shape::Int,
        FRAMEBUFFER_NO_ATTACHMENTS,
    ),
    ProbeDescriptor::new(
        gl::MAX_FRAMEBUFFER_HEIGHT,
        "MAX_FRAMEBUFFER_HEIGHT",
        Shape::Int,
        FRAMEBUFFER_NO_ATTACHMENTS,
    ),
    ProbeDescriptor::new(
        gl::MAX_FRAMEBUFFER_LAYERS,
        "MAX_FRAMEBUFFER_LAYERS",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 4, 3),
            Requirement::version(Api::Gles2, 3, 2),
            Requirement::extension_for("GL_ARB_framebuffer_no_attachments", ApiSet::GL),
            Requirement::extension_for("GL_EXT_geometry_shader", ApiSet::GLES2),
            Requirement::extension_for("GL_OES_geometry_shader", ApiSet::GLES2),
        ],
    ),
    ProbeDescriptor::new(
        gl::MAX_FRAMEBUFFER_SAMPLES,
        "MAX_FRAMEBUFFER_SAMPLES",
        Shape::Int,
        FRAMEBUFFER_NO_ATTACHMENTS,
    ),
    ProbeDescriptor::new(
        gl::LINE_WIDTH_RANGE,
        "LINE_WIDTH_RANGE",
        Shape::FloatArray(2),
        DESKTOP_ONLY,
    ),
    ProbeDescriptor::new(
        gl::LINE_WIDTH_GRANULARITY,
        "LINE_WIDTH_GRANULARITY",
        Shape::Float,
        DESKTOP_ONLY,
    ),
    ProbeDescriptor::new(
        gl::ALIASED_LINE_WIDTH_RANGE,
        "ALIASED_LINE_WIDTH_RANGE",
        Shape::FloatArray(2),
        &[
            Requirement::version(Api::Gl, 1, 2),
            Requirement::version(Api::Gles1, 1, 0),
            Requirement::version(Api::Gles2, 2, 0),
            Requirement::version(Api::Glsc2, 2, 0),
        ],
    ),
    ProbeDescriptor::new(
        gl::UNIFORM_BUFFER_OFFSET_ALIGNMENT,
        "UNIFORM_BUFFER_OFFSET_ALIGNMENT",
        Shape::Int,
        UNIFORM_BUFFER_OBJECT,
    ),
];
