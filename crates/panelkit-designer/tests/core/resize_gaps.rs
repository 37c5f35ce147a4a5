use panelkit_designer::{
    apply_gap_drag, calculate_resize_gaps, BoundingBox, GapOrientation, GapPanel, LayoutSpacing,
    LayoutTemplate, PageSize, Panel, PanelEdge, Point,
};

fn rect(id: &str, left: f64, top: f64, width: f64, height: f64) -> Panel {
    Panel::rectangle(id, BoundingBox::new(left, top, width, height))
}

#[test]
fn test_single_vertical_gap_between_side_by_side_panels() {
    let panels = vec![
        rect("a", 0.0, 0.0, 100.0, 200.0),
        rect("b", 110.0, 0.0, 100.0, 200.0),
    ];
    let gaps = calculate_resize_gaps(&panels, 20.0);

    assert_eq!(gaps.len(), 1);
    let gap = &gaps[0];
    assert_eq!(gap.orientation, GapOrientation::Vertical);
    assert_eq!(
        gap.panels.as_slice(),
        &[
            GapPanel::new("a", PanelEdge::Right),
            GapPanel::new("b", PanelEdge::Left),
        ]
    );
    assert_eq!((gap.x1, gap.x2), (105.0, 105.0));
    assert_eq!((gap.y1, gap.y2), (0.0, 200.0));
}

#[test]
fn test_gap_spans_only_the_shared_range() {
    let panels = vec![
        rect("a", 0.0, 0.0, 100.0, 200.0),
        rect("b", 110.0, 50.0, 100.0, 300.0),
    ];
    let gaps = calculate_resize_gaps(&panels, 20.0);
    assert_eq!(gaps.len(), 1);
    assert_eq!((gaps[0].y1, gaps[0].y2), (50.0, 200.0));
}

#[test]
fn test_horizontal_gap_between_stacked_panels() {
    let panels = vec![
        rect("lower", 0.0, 310.0, 400.0, 300.0),
        rect("upper", 50.0, 0.0, 400.0, 300.0),
    ];
    let gaps = calculate_resize_gaps(&panels, 20.0);

    assert_eq!(gaps.len(), 1);
    let gap = &gaps[0];
    assert_eq!(gap.orientation, GapOrientation::Horizontal);
    assert_eq!(gap.panels[0], GapPanel::new("upper", PanelEdge::Bottom));
    assert_eq!(gap.panels[1], GapPanel::new("lower", PanelEdge::Top));
    assert_eq!((gap.y1, gap.y2), (305.0, 305.0));
    assert_eq!((gap.x1, gap.x2), (50.0, 400.0));
}

#[test]
fn test_overlapping_panels_never_produce_gaps() {
    let panels = vec![
        rect("a", 0.0, 0.0, 100.0, 100.0),
        rect("b", 90.0, 0.0, 100.0, 100.0),
        rect("c", 0.0, 95.0, 100.0, 100.0),
    ];
    let gaps = calculate_resize_gaps(&panels, 20.0);
    assert!(gaps.iter().all(|g| !(g.involves("a") && g.involves("b"))));
    assert!(gaps.iter().all(|g| !(g.involves("a") && g.involves("c"))));
}

#[test]
fn test_non_rectangular_panel_never_in_gap() {
    let slanted = Panel::new(
        "slanted",
        vec![
            Point::new(110.0, 0.0),
            Point::new(210.0, 0.0),
            Point::new(210.0, 200.0),
            Point::new(120.0, 200.0),
        ],
    );
    let panels = vec![
        rect("a", 0.0, 0.0, 100.0, 200.0),
        slanted,
        rect("below", 0.0, 210.0, 100.0, 100.0),
    ];
    let gaps = calculate_resize_gaps(&panels, 20.0);

    assert_eq!(gaps.len(), 1);
    assert!(gaps.iter().all(|g| !g.involves("slanted")));
}

#[test]
fn test_diagonal_template_has_no_gaps() {
    let panels = LayoutTemplate::DiagonalSplit
        .generate(PageSize::default(), LayoutSpacing::default())
        .unwrap();
    assert!(calculate_resize_gaps(&panels, 20.0).is_empty());
}

#[test]
fn test_grid_2x2_has_four_gaps() {
    let panels = LayoutTemplate::Grid2x2
        .generate(PageSize::default(), LayoutSpacing::new(20.0, 10.0))
        .unwrap();
    let gaps = calculate_resize_gaps(&panels, 20.0);

    assert_eq!(gaps.len(), 4);
    let vertical = gaps.iter().filter(|g| g.is_vertical()).count();
    assert_eq!(vertical, 2);
    assert_eq!(gaps.len() - vertical, 2);
}

#[test]
fn test_isolated_panel_has_no_gaps() {
    let panels = vec![
        rect("a", 0.0, 0.0, 100.0, 100.0),
        rect("b", 300.0, 300.0, 100.0, 100.0),
    ];
    assert!(calculate_resize_gaps(&panels, 20.0).is_empty());
}

#[test]
fn test_vertical_drag_moves_only_declared_edges() {
    let panels = vec![
        rect("a", 0.0, 0.0, 100.0, 200.0),
        rect("b", 110.0, 0.0, 100.0, 200.0),
        rect("c", 0.0, 210.0, 210.0, 100.0),
    ];
    let gap = calculate_resize_gaps(&panels, 20.0)
        .into_iter()
        .find(|g| g.is_vertical())
        .unwrap();

    let dragged = apply_gap_drag(&panels, &gap, 12.0);

    assert_eq!(
        dragged[0].points(),
        &[
            Point::new(0.0, 0.0),
            Point::new(112.0, 0.0),
            Point::new(112.0, 200.0),
            Point::new(0.0, 200.0),
        ]
    );
    assert_eq!(
        dragged[1].points(),
        &[
            Point::new(122.0, 0.0),
            Point::new(210.0, 0.0),
            Point::new(210.0, 200.0),
            Point::new(122.0, 200.0),
        ]
    );
    assert_eq!(dragged[2], panels[2]);

    for (after, before) in dragged.iter().zip(&panels) {
        for (pa, pb) in after.points().iter().zip(before.points()) {
            assert_eq!(pa.y, pb.y);
        }
    }

    assert_eq!(dragged[0].drop_zone(), BoundingBox::new(0.0, 0.0, 112.0, 200.0));
    assert_eq!(dragged[1].drop_zone(), BoundingBox::new(122.0, 0.0, 88.0, 200.0));
}

#[test]
fn test_horizontal_drag_moves_y_only() {
    let panels = vec![
        rect("top", 0.0, 0.0, 200.0, 100.0),
        rect("bottom", 0.0, 110.0, 200.0, 100.0),
    ];
    let gap = calculate_resize_gaps(&panels, 20.0).remove(0);
    let dragged = apply_gap_drag(&panels, &gap, -30.0);

    assert_eq!(dragged[0].drop_zone(), BoundingBox::new(0.0, 0.0, 200.0, 70.0));
    assert_eq!(dragged[1].drop_zone(), BoundingBox::new(0.0, 80.0, 200.0, 130.0));
    for (after, before) in dragged.iter().zip(&panels) {
        for (pa, pb) in after.points().iter().zip(before.points()) {
            assert_eq!(pa.x, pb.x);
        }
    }
}

#[test]
fn test_dragged_grid_still_detects_gaps() {
    let panels = LayoutTemplate::TwoColumns
        .generate(PageSize::default(), LayoutSpacing::default())
        .unwrap();
    let gap = calculate_resize_gaps(&panels, 20.0).remove(0);
    let dragged = apply_gap_drag(&panels, &gap, 100.0);

    let regaps = calculate_resize_gaps(&dragged, 20.0);
    assert_eq!(regaps.len(), 1);
    assert_eq!(regaps[0].position(), gap.dragged(100.0).position());
}

#[test]
fn test_narrow_panels_get_facing_edges() {
    // Both panels are narrower than the threshold, so the far edges are
    // also within reach of each other.
    let panels = vec![
        rect("right", 10.0, 0.0, 8.0, 100.0),
        rect("left", 0.0, 0.0, 5.0, 100.0),
    ];
    let gaps = calculate_resize_gaps(&panels, 20.0);

    assert_eq!(gaps.len(), 1);
    assert_eq!(
        gaps[0].panels.as_slice(),
        &[
            GapPanel::new("left", PanelEdge::Right),
            GapPanel::new("right", PanelEdge::Left),
        ]
    );
    assert_eq!((gaps[0].x1, gaps[0].x2), (7.5, 7.5));

    let dragged = apply_gap_drag(&panels, &gaps[0], 1.0);
    assert_eq!(dragged[0].drop_zone(), BoundingBox::new(11.0, 0.0, 7.0, 100.0));
    assert_eq!(dragged[1].drop_zone(), BoundingBox::new(0.0, 0.0, 6.0, 100.0));
}

#[test]
fn test_short_stacked_panels_get_facing_edges() {
    let panels = vec![
        rect("lower", 0.0, 12.0, 100.0, 6.0),
        rect("upper", 0.0, 0.0, 100.0, 4.0),
    ];
    let gaps = calculate_resize_gaps(&panels, 20.0);

    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].panels[0], GapPanel::new("upper", PanelEdge::Bottom));
    assert_eq!(gaps[0].panels[1], GapPanel::new("lower", PanelEdge::Top));
    assert_eq!(gaps[0].y1, 8.0);
}
