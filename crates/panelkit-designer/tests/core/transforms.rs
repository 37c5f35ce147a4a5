use panelkit_designer::{
    bounding_box, mirror_panels, rotate_panels, BoundingBox, LayoutSpacing, LayoutTemplate,
    PageSize, Panel, PanelImage, Point,
};

fn portrait() -> PageSize {
    PageSize::new(800.0, 1200.0)
}

fn assert_panels_close(actual: &[Panel], expected: &[Panel]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert_eq!(a.id, e.id);
        assert_eq!(a.points().len(), e.points().len());
        for (pa, pe) in a.points().iter().zip(e.points()) {
            assert!(
                (pa.x - pe.x).abs() < 1e-9 && (pa.y - pe.y).abs() < 1e-9,
                "{:?} != {:?} on panel {}",
                pa,
                pe,
                a.id
            );
        }
    }
}

#[test]
fn test_four_rotations_of_full_page_are_identity() {
    let panels = LayoutTemplate::FullPage
        .generate(portrait(), LayoutSpacing::default())
        .unwrap();

    let mut rotated = panels.clone();
    for _ in 0..4 {
        rotated = rotate_panels(&rotated, portrait());
    }
    assert_eq!(rotated, panels);
}

#[test]
fn test_four_rotations_of_grid_return_to_start() {
    let panels = LayoutTemplate::Grid2x2
        .generate(portrait(), LayoutSpacing::default())
        .unwrap();

    let mut rotated = panels.clone();
    for _ in 0..4 {
        rotated = rotate_panels(&rotated, portrait());
    }
    assert_panels_close(&rotated, &panels);
}

#[test]
fn test_rotation_keeps_ids_order_and_images() {
    let mut panels = LayoutTemplate::ThreeRows
        .generate(portrait(), LayoutSpacing::default())
        .unwrap();
    panels[1].image = Some(PanelImage::new("lib/hero.png"));

    let rotated = rotate_panels(&panels, portrait());
    assert_eq!(rotated.len(), panels.len());
    for (r, p) in rotated.iter().zip(&panels) {
        assert_eq!(r.id, p.id);
        assert_eq!(r.image, p.image);
    }
}

#[test]
fn test_rotated_rows_become_columns() {
    let panels = LayoutTemplate::TwoRows
        .generate(portrait(), LayoutSpacing::new(0.0, 0.0))
        .unwrap();
    let rotated = rotate_panels(&panels, portrait());

    // Top row ends up on the right, bottom row on the left.
    assert_eq!(rotated[0].drop_zone(), BoundingBox::new(400.0, 0.0, 400.0, 1200.0));
    assert_eq!(rotated[1].drop_zone(), BoundingBox::new(0.0, 0.0, 400.0, 1200.0));
}

#[test]
fn test_drop_zone_matches_points_after_transforms() {
    let panels = LayoutTemplate::DiagonalSplit
        .generate(portrait(), LayoutSpacing::default())
        .unwrap();

    for transformed in [
        rotate_panels(&panels, portrait()),
        mirror_panels(&panels, portrait()),
        mirror_panels(&rotate_panels(&panels, portrait()), portrait()),
    ] {
        for panel in &transformed {
            assert_eq!(bounding_box(panel.points()), panel.drop_zone());
        }
    }
}

#[test]
fn test_mirror_is_involution() {
    let panels = LayoutTemplate::Grid2x3
        .generate(portrait(), LayoutSpacing::default())
        .unwrap();
    let twice = mirror_panels(&mirror_panels(&panels, portrait()), portrait());
    assert_eq!(twice, panels);
}

#[test]
fn test_mirror_involution_for_irregular_polygon() {
    let panel = Panel::new(
        "pent",
        vec![
            Point::new(100.0, 100.0),
            Point::new(300.0, 120.0),
            Point::new(350.0, 400.0),
            Point::new(200.0, 500.0),
            Point::new(50.0, 380.0),
        ],
    );
    let twice = mirror_panels(&mirror_panels(&[panel.clone()], portrait()), portrait());
    assert_eq!(twice, vec![panel]);
}

#[test]
fn test_mirror_moves_left_column_right() {
    let panels = LayoutTemplate::TwoColumns
        .generate(portrait(), LayoutSpacing::new(20.0, 10.0))
        .unwrap();
    let mirrored = mirror_panels(&panels, portrait());

    assert_eq!(mirrored[0].id, panels[0].id);
    assert_eq!(mirrored[0].drop_zone(), panels[1].drop_zone());
    assert_eq!(mirrored[1].drop_zone(), panels[0].drop_zone());
    // Top edge still comes first.
    let bb = mirrored[0].drop_zone();
    assert_eq!(mirrored[0].points()[0], Point::new(bb.left, bb.top));
    assert_eq!(mirrored[0].points()[1], Point::new(bb.right(), bb.top));
}

#[test]
fn test_transforms_do_not_mutate_input() {
    let panels = LayoutTemplate::WideTopTwoBottom
        .generate(portrait(), LayoutSpacing::default())
        .unwrap();
    let snapshot = panels.clone();
    let _ = rotate_panels(&panels, portrait());
    let _ = mirror_panels(&panels, portrait());
    assert_eq!(panels, snapshot);
}

#[test]
fn test_wide_single_panel_collapses_to_full_page() {
    let banner = Panel::rectangle("banner", BoundingBox::new(0.0, 100.0, 800.0, 300.0));
    let rotated = rotate_panels(&[banner], portrait());

    assert_eq!(rotated.len(), 1);
    assert_eq!(rotated[0].id, "banner");
    assert_eq!(rotated[0].drop_zone(), BoundingBox::new(0.0, 0.0, 800.0, 1200.0));
    assert_eq!(
        rotated[0].points(),
        &[
            Point::new(0.0, 0.0),
            Point::new(800.0, 0.0),
            Point::new(800.0, 1200.0),
            Point::new(0.0, 1200.0),
        ]
    );
}

#[test]
fn test_narrow_single_panel_rotates_geometrically() {
    let column = Panel::rectangle("column", BoundingBox::new(0.0, 0.0, 400.0, 1200.0));
    let rotated = rotate_panels(&[column], portrait());
    assert_eq!(rotated[0].drop_zone(), BoundingBox::new(0.0, 0.0, 800.0, 600.0));
}

#[test]
fn test_landscape_full_bleed_is_stable() {
    let landscape = PageSize::new(1200.0, 800.0);
    let panels = LayoutTemplate::FullPage
        .generate(landscape, LayoutSpacing::default())
        .unwrap();
    assert_eq!(rotate_panels(&panels, landscape), panels);
}
