//! Topology documents shared by the CLI tests.

/// Simulated SECOM with a stage built from two controller axes
#[allow(dead_code)]
pub const SECOM: &str = r#"
SimSECOM:
    class: Microscope
    role: secom
    children: [Light, "Optical Objective", Camera, "Sample Stage", "Optical Focus", "Stage Controller"]

Light:
    class: simulated.Light
    role: light
    affects: [Camera]
    properties:
        power: 0.1

"Optical Objective":
    class: static.OpticalLens
    role: lens
    init: {mag: 10.0, na: 0.95}
    affects: [Camera]

Camera:
    class: andorcam2.FakeAndorCam2
    role: ccd
    init: {device: 0, image: "andorcam2-fake-clara.tiff"}

"Stage Controller":
    class: tmcm.TMCLController
    init: {port: "/dev/fake6", axes: ["x", "y"]}
    children: {x: "Stage X", y: "Stage Y"}

"Stage X": {role: null}
"Stage Y": {role: null}

"Sample Stage":
    class: actuator.MultiplexActuator
    role: stage
    dependencies: {x: "Stage X", y: "Stage Y"}
    affects: [Camera]

"Optical Focus":
    class: simulated.Stage
    role: focus
    init: {axes: ["z"]}
    affects: [Camera]
"#;

/// Instantiation order of `SECOM`
#[allow(dead_code)]
pub const SECOM_ORDER: &[&str] = &[
    "SimSECOM",
    "Light",
    "Optical Objective",
    "Camera",
    "Stage Controller",
    "Stage X",
    "Stage Y",
    "Sample Stage",
    "Optical Focus",
];

/// `Sample Stage` depends on an axis nobody defines
#[allow(dead_code)]
pub const MISSING_AXIS: &str = r#"
"Stage Controller":
    class: tmcm.TMCLController
    children: {x: "Stage X"}
"Stage X": {}
"Sample Stage":
    class: actuator.MultiplexActuator
    role: stage
    dependencies: {x: "Stage X", y: "Stage Y"}
"#;

/// Light source affecting a camera that is not defined
#[allow(dead_code)]
pub const DANGLING_AFFECTS: &str = r#"
Light:
    class: simulated.Light
    role: light
    affects: [Camera]
"#;

/// Two-node construction cycle
#[allow(dead_code)]
pub const CYCLE: &str = r#"
A: {class: X, children: {c: B}}
B: {role: r, children: {c: A}}
"#;

/// Misspelled `affects`
#[allow(dead_code)]
pub const TYPO: &str = r#"
Light:
    class: simulated.Light
    role: light
    afects: [Camera]
Camera: {class: simcam.Camera, role: ccd}
"#;
