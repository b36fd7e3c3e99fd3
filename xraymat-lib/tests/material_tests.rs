mod common;

use approx::assert_relative_eq;
use serde::Serialize;
use xraymat::{DENSE_LEN, ElementId, Material, XrayMatError};

fn water() -> Material {
    Material::from_compound("H2O", Some(1.0)).unwrap()
}

#[test]
fn test_from_element() {
    let fe = Material::from_element("Fe", None).unwrap();
    assert_eq!(fe.atomic_numbers(), &[26]);
    assert_relative_eq!(fe.density(), 7.874, epsilon = 1e-3);

    let dense_fe = Material::from_element(26u16, Some(8.0)).unwrap();
    assert_eq!(dense_fe.densities(), &[8.0]);

    assert_eq!(
        Material::from_element("Xx", None).unwrap_err(),
        XrayMatError::UnknownElement("Xx".to_string())
    );
}

#[test]
fn test_from_compound() {
    let w = water();
    assert_eq!(w.symbols(), vec!["H", "O"]);
    assert_relative_eq!(w.density(), 1.0, max_relative = 1e-12);
    assert_relative_eq!(w.densities()[0], 0.1119, epsilon = 1e-4);
    assert_relative_eq!(w.densities()[1], 0.8881, epsilon = 1e-4);

    let default_density = Material::from_compound("SiO2", None).unwrap();
    assert_relative_eq!(default_density.density(), 1.0, max_relative = 1e-12);

    assert!(matches!(
        Material::from_compound("H2O)", None),
        Err(XrayMatError::MalformedFormula(_))
    ));
}

#[test]
fn test_repeated_elements_are_merged() {
    let m = Material::from_pairs([("H", 1.0), ("O", 2.0), ("H", 0.5)]).unwrap();
    assert_eq!(m.len(), 2);
    assert_eq!(m.density_of(&"H".into()).unwrap(), 1.5);
    assert_eq!(m.density_of(&"Fe".into()).unwrap(), 0.0);
}

#[test]
fn test_dense_array_round_trip() {
    let mut dense = vec![0.0; 8];
    dense[5] = 2.0;
    dense[7] = 0.5;
    let m = Material::from_array(&dense).unwrap();
    assert_eq!(m.atomic_numbers(), &[6, 8]);

    let back = m.to_array();
    assert_eq!(back.len(), DENSE_LEN);
    assert_eq!(back[5], 2.0);
    assert_eq!(back[7], 0.5);
    assert_eq!(back.iter().filter(|&&v| v != 0.0).count(), 2);
    assert_eq!(Material::from_array(&back).unwrap(), m);

    assert_eq!(
        Material::from_array(&[0.0; DENSE_LEN + 1]).unwrap_err(),
        XrayMatError::LengthMismatch {
            expected: DENSE_LEN,
            found: DENSE_LEN + 1
        }
    );
}

#[test]
fn test_invalid_densities() {
    assert_eq!(
        Material::new(&["H".into()], &[-1.0]).unwrap_err(),
        XrayMatError::InvalidDensity(-1.0)
    );
    assert!(matches!(
        Material::new(&["H".into(), "O".into()], &[1.0]),
        Err(XrayMatError::LengthMismatch { .. })
    ));
    assert_eq!(
        Material::default().with_density(1.0).unwrap_err(),
        XrayMatError::InvalidDensity(0.0)
    );
}

#[test]
fn test_rescale_keeps_proportions() {
    let m = Material::new(&["H".into(), "O".into()], &[0.111, 0.889]).unwrap();
    let scaled = m.with_density(2.0).unwrap();
    assert_relative_eq!(scaled.density(), 2.0, max_relative = 1e-12);
    assert_relative_eq!(scaled.densities()[0], 0.222, max_relative = 1e-12);
    assert_relative_eq!(scaled.densities()[1], 1.778, max_relative = 1e-12);
    assert_relative_eq!(
        scaled.densities()[0] / scaled.densities()[1],
        0.111 / 0.889,
        max_relative = 1e-12
    );
}

#[test]
fn test_set_density_leaves_clones_alone() {
    let mut m = water();
    let snapshot = m.clone();
    m.set_density(0.5).unwrap();
    assert_relative_eq!(m.density(), 0.5, max_relative = 1e-12);
    assert_relative_eq!(snapshot.density(), 1.0, max_relative = 1e-12);
}

#[test]
fn test_select() {
    let w = water();
    let oxygen = w.select(&["O".into()]).unwrap();
    assert_eq!(oxygen.atomic_numbers(), &[8]);
    assert_eq!(oxygen.densities()[0], w.densities()[1]);
    assert!(w.select(&["Fe".into()]).unwrap().is_empty());
}

#[test]
fn test_addition() {
    let w = water();
    let fe = Material::from_element("Fe", None).unwrap();
    let sum = &w + &fe;
    assert_relative_eq!(sum.density(), w.density() + fe.density(), max_relative = 1e-12);
    assert_eq!(sum.atomic_numbers(), &[1, 8, 26]);

    let by_number = w.add_number_densities(&fe).unwrap();
    assert_eq!(by_number.atomic_numbers(), sum.atomic_numbers());
    for (a, b) in by_number.densities().iter().zip(sum.densities()) {
        assert_relative_eq!(*a, *b, max_relative = 1e-12);
    }

    let doubled = w.clone() + w.clone();
    assert_relative_eq!(doubled.density(), 2.0, max_relative = 1e-12);
    assert_eq!(doubled.len(), 2);
}

#[test]
fn test_display() {
    let m = Material::new(&["H".into(), "O".into()], &[0.5, 1.5]).unwrap();
    assert_eq!(m.to_string(), "{H: 0.5, O: 1.5}");
    assert_eq!(Material::default().to_string(), "{}");
}

#[test]
fn test_serde_round_trip() {
    let w = water();
    let bytes = postcard::to_allocvec(&w).unwrap();
    let back: Material = postcard::from_bytes(&bytes).unwrap();
    assert_eq!(back, w);
}

#[test]
fn test_deserialize_rejects_unknown_element() {
    #[derive(Serialize)]
    struct Raw {
        z: Vec<u16>,
        g_cc: Vec<f64>,
    }
    let bytes = postcard::to_allocvec(&Raw {
        z: vec![0],
        g_cc: vec![1.0],
    })
    .unwrap();
    assert!(postcard::from_bytes::<Material>(&bytes).is_err());
}

#[test]
fn test_from_standard() {
    let reg = common::registry();
    let w = Material::from_standard(&reg, "Water, Liquid").unwrap();
    assert_eq!(w.atomic_numbers(), &[1, 8]);
    assert_relative_eq!(w.densities()[0], 0.111894, max_relative = 1e-12);
    assert_relative_eq!(w.density(), 1.0, max_relative = 1e-9);

    assert_eq!(
        Material::from_standard(&reg, "Kryptonite").unwrap_err(),
        XrayMatError::UnknownMaterial("Kryptonite".to_string())
    );
}

#[test]
fn test_water_coefficients() {
    let reg = common::registry();
    let w = water();
    let e = [10.0];

    let mu = w.mu(&reg, &e).unwrap();
    assert_relative_eq!(mu[0], 5.329, max_relative = 1e-3);

    let mu_pe = w.mu_pe(&reg, &e).unwrap();
    let sigma = w.sigma(&reg, &e).unwrap();
    assert_relative_eq!(mu_pe[0] + sigma[0], mu[0], max_relative = 1e-12);

    let k = w.mu_pe_k(&reg, &e).unwrap();
    let expected = w.densities()[0] * 0.00061 + w.densities()[1] * 5.6 * 0.94;
    assert_relative_eq!(k[0], expected, max_relative = 1e-12);
}

#[test]
fn test_delta_beta_match_registry() {
    let reg = common::registry();
    let w = water();
    let e = common::ENERGIES;
    let ids: Vec<ElementId> = w.element_ids();
    let direct = reg
        .refractive_index(&ids, Some(w.densities()), None, Some(&e))
        .unwrap();
    assert_eq!(w.delta(&reg, &e).unwrap(), direct.delta);
    assert_eq!(w.beta(&reg, &e).unwrap(), direct.beta);
}

#[test]
fn test_coefficients_need_tables() {
    let reg = common::registry();
    let quartz = Material::from_compound("SiO2", Some(2.65)).unwrap();
    assert_eq!(
        quartz.mu(&reg, &[10.0]).unwrap_err(),
        XrayMatError::UnknownElement("Si".to_string())
    );
}
