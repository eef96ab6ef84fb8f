use autograph_caps::{
    probe, Api, ApiSet, CapabilityProbe, ErrorPolicy, Extensions, FetchCallbacks, FetchError,
    LimitId, ProbeConfig, ProbeDescriptor, ProbeError, Requirement, RuntimeContext, Shape,
    ShapeKind, ShapeKinds, Version,
};
use std::cell::{Cell, RefCell};

const MAX_TEXTURE_SIZE: LimitId = LimitId(0x0D33);
const MAX_VIEWPORT_DIMS: LimitId = LimitId(0x0D3A);
const ALIASED_LINE_WIDTH_RANGE: LimitId = LimitId(0x846E);
const MAX_TEXTURE_MAX_ANISOTROPY: LimitId = LimitId(0x84FF);
const MAX_COMPUTE_WORK_GROUP_INVOCATIONS: LimitId = LimitId(0x90EB);
const RENDERER: LimitId = LimitId(0x1F01);

const BASELINE: &[Requirement] = &[
    Requirement::version(Api::Gl, 1, 0),
    Requirement::version(Api::Gles2, 2, 0),
];

static REGISTRY: &[ProbeDescriptor] = &[
    ProbeDescriptor::new(0x0D33, "MAX_TEXTURE_SIZE", Shape::Int, BASELINE),
    ProbeDescriptor::new(
        0x90EB,
        "MAX_COMPUTE_WORK_GROUP_INVOCATIONS",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 4, 3),
            Requirement::extension_for("GL_ARB_compute_shader", ApiSet::GL),
            Requirement::version(Api::Gles2, 3, 1),
        ],
    ),
    ProbeDescriptor::new(0x0D3A, "MAX_VIEWPORT_DIMS", Shape::IntArray(2), BASELINE),
    ProbeDescriptor::new(
        0x846E,
        "ALIASED_LINE_WIDTH_RANGE",
        Shape::FloatArray(2),
        BASELINE,
    ),
    ProbeDescriptor::new(
        0x84FF,
        "MAX_TEXTURE_MAX_ANISOTROPY",
        Shape::Float,
        &[
            Requirement::version(Api::Gl, 4, 6),
            Requirement::extension("GL_EXT_texture_filter_anisotropic"),
        ],
    ),
    ProbeDescriptor::new(0x1F01, "RENDERER", Shape::String, BASELINE),
];

static FOO_ONLY: &[ProbeDescriptor] = &[ProbeDescriptor::new(
    0x1000,
    "FOO_LIMIT",
    Shape::Int,
    &[Requirement::extension("FOO")],
)];

fn init_logger() {
    let _ = pretty_env_logger::try_init();
}

fn context(api: Api, major: u32, minor: u32, extensions: &[&str]) -> RuntimeContext {
    RuntimeContext::new(
        Version::new(major, minor, api),
        extensions.iter().cloned().collect(),
    )
}

/// Callbacks answering every query. Ints echo the limit id.
fn mock_callbacks(calls: &Cell<usize>) -> FetchCallbacks {
    FetchCallbacks::new()
        .with_int(move |id| {
            calls.set(calls.get() + 1);
            Ok(id.0 as i32)
        })
        .with_float(move |_| {
            calls.set(calls.get() + 1);
            Ok(16.0)
        })
        .with_int_array(move |_, buf| {
            calls.set(calls.get() + 1);
            for (i, v) in buf.iter_mut().enumerate() {
                *v = 4096 * (i as i32 + 1);
            }
            Ok(buf.len())
        })
        .with_float_array(move |_, buf| {
            calls.set(calls.get() + 1);
            for (i, v) in buf.iter_mut().enumerate() {
                *v = 1.0 + 9.0 * i as f32;
            }
            Ok(buf.len())
        })
        .with_string(move |_| {
            calls.set(calls.get() + 1);
            Ok("Mock Renderer".to_string())
        })
}

//--------------------------------------------------------------------------------------------------

#[test]
fn test_inapplicable_limits_are_absent() {
    init_logger();
    let calls = Cell::new(0);
    let fetch = mock_callbacks(&calls);
    let ctx = context(Api::Gl, 3, 3, &[]);

    let snapshot = probe(Some(&ctx), REGISTRY, &fetch).unwrap();

    assert!(!snapshot.contains(MAX_COMPUTE_WORK_GROUP_INVOCATIONS));
    assert!(!snapshot.contains(MAX_TEXTURE_MAX_ANISOTROPY));
    assert_eq!(snapshot.len(), 4);
    // inapplicable limits are never fetched
    assert_eq!(calls.get(), 4);
    assert!(snapshot.failures().is_empty());
}

#[test]
fn test_values_are_stored_as_fetched() {
    init_logger();
    let calls = Cell::new(0);
    let fetch = mock_callbacks(&calls);
    let ctx = context(Api::Gl, 4, 6, &[]);

    let snapshot = probe(Some(&ctx), REGISTRY, &fetch).unwrap();

    assert_eq!(snapshot.len(), REGISTRY.len());
    assert_eq!(snapshot.get_int(MAX_TEXTURE_SIZE), Some(0x0D33));
    assert_eq!(
        snapshot.get_int(MAX_COMPUTE_WORK_GROUP_INVOCATIONS),
        Some(0x90EB)
    );
    assert_eq!(snapshot.get_float(MAX_TEXTURE_MAX_ANISOTROPY), Some(16.0));
    assert_eq!(snapshot.get_str(RENDERER), Some("Mock Renderer"));
    // typed accessors do not convert between shapes
    assert_eq!(snapshot.get_float(MAX_TEXTURE_SIZE), None);
    assert_eq!(snapshot.get_int(RENDERER), None);

    let ids: Vec<_> = snapshot.iter().map(|(id, _)| id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

#[test]
fn test_arrays_have_exact_length() {
    init_logger();
    let calls = Cell::new(0);
    let fetch = mock_callbacks(&calls);
    let ctx = context(Api::Gles2, 3, 0, &[]);

    let snapshot = probe(Some(&ctx), REGISTRY, &fetch).unwrap();

    assert_eq!(
        snapshot.get_int_array(MAX_VIEWPORT_DIMS),
        Some(&[4096, 8192][..])
    );
    let range: Vec<f32> = snapshot
        .get_float_array(ALIASED_LINE_WIDTH_RANGE)
        .unwrap()
        .iter()
        .map(|v| v.into_inner())
        .collect();
    assert_eq!(range, vec![1.0, 10.0]);
}

#[test]
fn test_array_length_mismatch_is_a_failure() {
    init_logger();
    let buffer_len = Cell::new(0);
    let fetch = FetchCallbacks::new()
        .with_int(|_| Ok(1))
        .with_int_array(|_, buf| {
            buffer_len.set(buf.len());
            buf[0] = 16384;
            // short write
            Ok(1)
        })
        .with_float_array(|_, buf| {
            // claims more than the buffer holds
            Ok(buf.len() + 1)
        });
    let ctx = context(Api::Gl, 3, 3, &[]);

    let snapshot = probe(Some(&ctx), REGISTRY, &fetch).unwrap();

    assert_eq!(buffer_len.get(), 2);
    assert!(!snapshot.contains(MAX_VIEWPORT_DIMS));
    assert!(!snapshot.contains(ALIASED_LINE_WIDTH_RANGE));
    assert!(snapshot.contains(MAX_TEXTURE_SIZE));

    let failures = snapshot.failures();
    assert_eq!(failures.len(), 2);
    assert_eq!(failures[0].id, MAX_VIEWPORT_DIMS);
    assert_eq!(
        failures[0].error,
        FetchError::ShapeMismatch {
            expected: 2,
            actual: 1
        }
    );
    assert_eq!(failures[1].id, ALIASED_LINE_WIDTH_RANGE);
    assert_eq!(
        failures[1].error,
        FetchError::ShapeMismatch {
            expected: 2,
            actual: 3
        }
    );
}

#[test]
fn test_extension_requirement() {
    init_logger();
    let calls = Cell::new(0);
    let fetch = mock_callbacks(&calls);

    let with_foo = context(Api::Gl, 2, 1, &["FOO"]);
    let snapshot = probe(Some(&with_foo), FOO_ONLY, &fetch).unwrap();
    assert_eq!(snapshot.get_int(LimitId(0x1000)), Some(0x1000));
    assert_eq!(calls.get(), 1);

    calls.set(0);
    let without_foo = context(Api::Gl, 4, 6, &["GL_FOO"]);
    let snapshot = probe(Some(&without_foo), FOO_ONLY, &fetch).unwrap();
    assert!(snapshot.is_empty());
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_extension_restricted_to_api() {
    init_logger();
    let calls = Cell::new(0);
    let fetch = mock_callbacks(&calls);

    let gl33 = context(Api::Gl, 3, 3, &["GL_ARB_compute_shader"]);
    let snapshot = probe(Some(&gl33), REGISTRY, &fetch).unwrap();
    assert!(snapshot.contains(MAX_COMPUTE_WORK_GROUP_INVOCATIONS));

    let es30 = context(Api::Gles2, 3, 0, &["GL_ARB_compute_shader"]);
    let snapshot = probe(Some(&es30), REGISTRY, &fetch).unwrap();
    assert!(!snapshot.contains(MAX_COMPUTE_WORK_GROUP_INVOCATIONS));

    let es31 = context(Api::Gles2, 3, 1, &[]);
    let snapshot = probe(Some(&es31), REGISTRY, &fetch).unwrap();
    assert!(snapshot.contains(MAX_COMPUTE_WORK_GROUP_INVOCATIONS));
}

#[test]
fn test_failures_are_isolated() {
    init_logger();
    let fetch = FetchCallbacks::new().with_int(|id| {
        if id == MAX_TEXTURE_SIZE {
            Err(FetchError::Rejected { code: 0x0500 })
        } else {
            Ok(1024)
        }
    });
    let ctx = context(Api::Gl, 4, 3, &[]);

    let snapshot = probe(Some(&ctx), REGISTRY, &fetch).unwrap();

    assert!(!snapshot.contains(MAX_TEXTURE_SIZE));
    assert_eq!(
        snapshot.get_int(MAX_COMPUTE_WORK_GROUP_INVOCATIONS),
        Some(1024)
    );
    assert_eq!(snapshot.failures().len(), 1);
    assert_eq!(snapshot.failures()[0].id, MAX_TEXTURE_SIZE);
    assert_eq!(snapshot.failures()[0].name, "MAX_TEXTURE_SIZE");
}

#[test]
fn test_mechanism_failures_are_recovered() {
    init_logger();
    let fetch = FetchCallbacks::new()
        .with_int(|_| Err(FetchError::Mechanism("glGetIntegerv not loaded".to_string())))
        .with_string(|_| Ok("Mock Renderer".to_string()));
    let ctx = context(Api::Gl, 4, 6, &[]);

    let snapshot = probe(Some(&ctx), REGISTRY, &fetch).unwrap();

    assert_eq!(snapshot.get_str(RENDERER), Some("Mock Renderer"));
    assert_eq!(snapshot.failures().len(), 2);
    assert!(snapshot.failures().iter().all(|f| f.error.is_mechanism()));
}

#[test]
fn test_nan_is_stored() {
    init_logger();
    let fetch = FetchCallbacks::new()
        .with_float(|_| Ok(std::f32::NAN))
        .with_float_array(|_, buf| {
            buf[0] = 1.0;
            buf[1] = std::f32::NAN;
            Ok(2)
        });
    let ctx = context(Api::Gl, 4, 6, &[]);

    let snapshot = probe(Some(&ctx), REGISTRY, &fetch).unwrap();

    assert!(snapshot.failures().is_empty());
    assert!(snapshot.get_float(MAX_TEXTURE_MAX_ANISOTROPY).unwrap().is_nan());
    let range = snapshot.get_float_array(ALIASED_LINE_WIDTH_RANGE).unwrap();
    assert_eq!(range[0].into_inner(), 1.0);
    assert!(range[1].into_inner().is_nan());

    // NaN values still compare equal between passes
    assert_eq!(snapshot, probe(Some(&ctx), REGISTRY, &fetch).unwrap());
}

#[test]
fn test_registry_order_does_not_matter() {
    init_logger();
    let reversed: Vec<ProbeDescriptor> = REGISTRY.iter().rev().cloned().collect();
    let fetch = FetchCallbacks::new()
        .with_int(|id| {
            if id == MAX_TEXTURE_SIZE {
                Ok(16384)
            } else {
                Err(FetchError::Rejected { code: 0x0500 })
            }
        })
        .with_float_array(|_, _| Err(FetchError::Rejected { code: 0x0500 }))
        .with_string(|_| Ok("Mock Renderer".to_string()));
    let ctx = context(Api::Gl, 4, 6, &[]);

    let forward = probe(Some(&ctx), REGISTRY, &fetch).unwrap();
    let backward = probe(Some(&ctx), &reversed, &fetch).unwrap();

    assert_eq!(forward.failures().len(), 2);
    assert_ne!(forward.failures()[0].id, backward.failures()[0].id);
    assert_eq!(forward, backward);
}

#[test]
fn test_probe_is_idempotent() {
    init_logger();
    let calls = Cell::new(0);
    let fetch = mock_callbacks(&calls);
    let ctx = context(Api::Gl, 4, 5, &["GL_EXT_texture_filter_anisotropic"]);

    let first = probe(Some(&ctx), REGISTRY, &fetch).unwrap();
    let second = probe(Some(&ctx), REGISTRY, &fetch).unwrap();
    assert_eq!(first, second);
    assert_eq!(calls.get(), 2 * REGISTRY.len());
}

#[test]
fn test_missing_context() {
    init_logger();
    let calls = Cell::new(0);
    let fetch = mock_callbacks(&calls);

    match probe(None, REGISTRY, &fetch) {
        Err(ProbeError::InvalidArgument(_)) => {}
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(calls.get(), 0);

    // whatever the policy
    let strict = CapabilityProbe::new(ProbeConfig {
        error_policy: ErrorPolicy::Propagate,
        ..ProbeConfig::default()
    });
    assert!(strict.probe(None, &[], &fetch).is_err());
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_missing_callbacks_are_aggregated() {
    init_logger();
    let fetched = RefCell::new(Vec::new());
    let fetch = FetchCallbacks::new().with_int(|id| {
        fetched.borrow_mut().push(id);
        Ok(0)
    });
    let ctx = context(Api::Gl, 3, 3, &[]);

    let snapshot = probe(Some(&ctx), REGISTRY, &fetch).unwrap();

    assert_eq!(*fetched.borrow(), vec![MAX_TEXTURE_SIZE]);
    assert_eq!(snapshot.len(), 1);
    assert!(snapshot.failures().is_empty());
    assert_eq!(
        snapshot.skipped(),
        &[MAX_VIEWPORT_DIMS, ALIASED_LINE_WIDTH_RANGE, RENDERER][..]
    );
    assert_eq!(
        snapshot.missing_callbacks(),
        ShapeKinds::INT_ARRAY | ShapeKinds::FLOAT_ARRAY | ShapeKinds::STRING
    );
}

#[test]
fn test_propagate_policy() {
    init_logger();
    let strict = CapabilityProbe::new(ProbeConfig {
        error_policy: ErrorPolicy::Propagate,
        ..ProbeConfig::default()
    });
    let ctx = context(Api::Gl, 3, 3, &[]);

    let failing = FetchCallbacks::new().with_int(|_| Err(FetchError::Rejected { code: 0x0500 }));
    match strict.probe(Some(&ctx), REGISTRY, &failing) {
        Err(ProbeError::FetchFailed { id, cause, .. }) => {
            assert_eq!(id, MAX_TEXTURE_SIZE);
            assert_eq!(cause, FetchError::Rejected { code: 0x0500 });
        }
        other => panic!("unexpected result: {:?}", other),
    }

    let int_only = FetchCallbacks::new().with_int(|_| Ok(0));
    match strict.probe(Some(&ctx), REGISTRY, &int_only) {
        Err(ProbeError::UnsupportedShape { id, shape, .. }) => {
            assert_eq!(id, MAX_VIEWPORT_DIMS);
            assert_eq!(shape, ShapeKind::IntArray);
        }
        other => panic!("unexpected result: {:?}", other),
    }

    // no error: same result as the default policy
    let calls = Cell::new(0);
    let fetch = mock_callbacks(&calls);
    assert_eq!(
        strict.probe(Some(&ctx), REGISTRY, &fetch).unwrap(),
        probe(Some(&ctx), REGISTRY, &fetch).unwrap()
    );
}

#[test]
fn test_duplicate_ids() {
    init_logger();
    static DUPLICATES: &[ProbeDescriptor] = &[
        ProbeDescriptor::new(0x2000, "FIRST", Shape::Int, BASELINE),
        ProbeDescriptor::new(0x2000, "SECOND", Shape::Int, BASELINE),
    ];
    let calls = Cell::new(0);
    let fetch = FetchCallbacks::new().with_int(|_| {
        calls.set(calls.get() + 1);
        Ok(calls.get() as i32)
    });
    let ctx = context(Api::Gl, 4, 6, &[]);

    let snapshot = probe(Some(&ctx), DUPLICATES, &fetch).unwrap();
    assert_eq!(snapshot.get_int(LimitId(0x2000)), Some(1));
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_empty_registry() {
    init_logger();
    let calls = Cell::new(0);
    let fetch = mock_callbacks(&calls);
    let ctx = RuntimeContext::new(Version::new(4, 6, Api::Gl), Extensions::new());

    let snapshot = probe(Some(&ctx), &[], &fetch).unwrap();
    assert!(snapshot.is_empty());
    assert!(snapshot.failures().is_empty());
    assert!(snapshot.skipped().is_empty());
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_no_applicable_descriptor() {
    init_logger();
    let calls = Cell::new(0);
    let fetch = mock_callbacks(&calls);
    let ctx = context(Api::Gles1, 1, 1, &[]);

    for warn_on_empty in &[true, false] {
        let prober = CapabilityProbe::new(ProbeConfig {
            warn_on_empty: *warn_on_empty,
            ..ProbeConfig::default()
        });
        let snapshot = prober.probe(Some(&ctx), REGISTRY, &fetch).unwrap();
        assert!(snapshot.is_empty());
    }
    assert_eq!(calls.get(), 0);
}
