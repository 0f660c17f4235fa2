mod common;

use common::{TestEnv, SECOM};

#[test]
fn affects_prints_metadata_plan() {
    let env = TestEnv::new();
    env.write("secom.odm.yaml", SECOM);

    let result = env.run(&["affects", "secom.odm.yaml"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.starts_with("Metadata plan (3 bindings):"), "{}", result.stdout);
    assert!(result.stdout.contains("Light → Camera: input_wavelength, light_power"));
    assert!(result
        .stdout
        .contains("Optical Objective → Camera: lens_name, pixel_size, lens_magnification"));
    assert!(result.stdout.contains("Sample Stage → Camera: position"));
    assert!(!result.stdout.contains("Optical Focus →"));
}

#[test]
fn affects_verbose_lists_skipped_edges() {
    let env = TestEnv::new();
    env.write("secom.odm.yaml", SECOM);

    let result = env.run(&["affects", "secom.odm.yaml", "-v"]);

    assert!(result.success);
    assert!(result
        .stdout
        .contains("Optical Focus -> Camera skipped: no metadata is derived from role 'focus'"));
}

#[test]
fn affects_warns_about_lens_without_camera() {
    let env = TestEnv::new();
    env.write(
        "sem.odm.yaml",
        "Lens: {class: static.OpticalLens, role: lens, affects: [SED]}\nSED: {class: D, role: se-detector}\n",
    );

    let result = env.run(&["--json", "affects", "sem.odm.yaml"]);

    assert!(result.success);
    let skipped = result.events_of("skipped");
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0]["warn"], true);
    assert_eq!(
        skipped[0]["reason"],
        "does not know what to do with a lens in front of a se-detector"
    );
    assert_eq!(result.events_of("complete")[0]["warnings"], 1);
}
