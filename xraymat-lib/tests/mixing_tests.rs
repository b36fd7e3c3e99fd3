use approx::assert_relative_eq;
use xraymat::{
    Basis, Material, Mixture, XrayMatError, add_by_mass, add_by_volume, library, sum_by_mass,
    sum_by_volume,
};

fn water() -> Material {
    Material::from_compound("H2O", Some(1.0)).unwrap()
}

fn iron() -> Material {
    Material::from_element("Fe", Some(7.874)).unwrap()
}

#[test]
fn test_final_density_is_honoured() {
    let mixed = sum_by_mass(&[water(), iron()], &[1.0, 1.0], Some(5.0)).unwrap();
    assert_relative_eq!(mixed.density(), 5.0, max_relative = 1e-12);

    let mixed = sum_by_volume(&[water(), iron()], &[3.0, 1.0], Some(0.5)).unwrap();
    assert_relative_eq!(mixed.density(), 0.5, max_relative = 1e-12);
}

#[test]
fn test_mass_mixing_is_volume_additive() {
    let mixed = add_by_mass(&iron(), 1.0, &water(), 1.0, None).unwrap();
    // 2 g over 1/7.874 + 1 cc, not the mean of the two densities
    let expected = 2.0 / (1.0 / 7.874 + 1.0);
    assert_relative_eq!(mixed.density(), expected, max_relative = 1e-12);
    assert_relative_eq!(mixed.density(), 1.7746, epsilon = 1e-4);

    // equal masses of each
    let fe = mixed.density_of(&"Fe".into()).unwrap();
    let h2o = mixed.density() - fe;
    assert_relative_eq!(fe, h2o, max_relative = 1e-12);
}

#[test]
fn test_volume_mixing() {
    let mixed = add_by_volume(&iron(), 1.0, &water(), 3.0, None).unwrap();
    assert_relative_eq!(mixed.density(), (7.874 + 3.0) / 4.0, max_relative = 1e-12);
    assert_relative_eq!(
        mixed.density_of(&"Fe".into()).unwrap(),
        7.874 / 4.0,
        max_relative = 1e-12
    );
}

#[test]
fn test_mixing_identical_materials() {
    let w = water();
    let mixed = sum_by_mass(&[w.clone(), w.clone(), w.clone()], &[1.0, 2.0, 3.0], None).unwrap();
    for (a, b) in mixed.densities().iter().zip(w.densities()) {
        assert_relative_eq!(*a, *b, max_relative = 1e-12);
    }
}

#[test]
fn test_mixture_builder() {
    let by_mass = Mixture::by_mass()
        .with(&iron(), 1.0)
        .with(&water(), 1.0)
        .build()
        .unwrap();
    assert_eq!(
        by_mass,
        sum_by_mass(&[iron(), water()], &[1.0, 1.0], None).unwrap()
    );

    let recipe = Mixture::new(Basis::Volume)
        .with(&iron(), 1.0)
        .with(&water(), 1.0)
        .final_density(3.0);
    assert_eq!(recipe.basis(), Basis::Volume);
    assert_relative_eq!(recipe.build().unwrap().density(), 3.0, max_relative = 1e-12);
}

#[test]
fn test_mixing_errors() {
    assert!(matches!(
        sum_by_mass(&[water()], &[1.0, 2.0], None),
        Err(XrayMatError::LengthMismatch { .. })
    ));
    assert_eq!(
        sum_by_volume(&[water(), iron()], &[0.0, 0.0], None).unwrap_err(),
        XrayMatError::InvalidDensity(0.0)
    );
    assert_eq!(
        sum_by_mass(&[water()], &[-1.0], None).unwrap_err(),
        XrayMatError::InvalidDensity(-1.0)
    );
    assert_eq!(
        sum_by_mass(&[Material::default()], &[1.0], None).unwrap_err(),
        XrayMatError::InvalidDensity(0.0)
    );
    assert!(Mixture::by_volume().build().is_err());
}

#[test]
fn test_library_materials() {
    let w = library::material("water").unwrap();
    assert_relative_eq!(w.density(), 1.0, max_relative = 1e-12);
    assert_eq!(w.symbols(), vec!["H", "O"]);

    let fe = library::material("Iron").unwrap();
    assert_eq!(fe.atomic_numbers(), &[26]);

    let steel = library::material("stainless_steel").unwrap();
    assert_relative_eq!(steel.density(), 7.7, max_relative = 1e-12);
    assert_eq!(steel.len(), 5);

    let oak = library::material("live_oak").unwrap();
    assert_relative_eq!(oak.density(), 0.977, max_relative = 1e-12);

    let clothes = library::material("cotton_clothes_packed").unwrap();
    assert_relative_eq!(clothes.density(), 0.25, max_relative = 1e-12);

    assert_eq!(
        library::material("adamantium").unwrap_err(),
        XrayMatError::UnknownMaterial("adamantium".to_string())
    );
}

#[test]
fn test_every_library_name_resolves() {
    let names = library::names();
    assert!(names.iter().any(|n| n == "rdx"));
    assert!(names.iter().any(|n| n == "naval_brass"));
    assert!(names.iter().any(|n| n == "hydrogen"));
    for name in names {
        let m = library::material(&name).unwrap();
        assert!(m.density() > 0.0, "{name} has no density");
    }
}
