use degurba_rs::api::{CameraState, DashboardConfig, DashboardEngine};
use degurba_rs::classify::ClassGranularity;
use degurba_rs::core::{FeatureGeometry, FeatureProperties, MapFeature, Viewport};
use degurba_rs::interaction::{DisplayOptions, FeatureClick, MapLayerKind};
use degurba_rs::render::NullRenderer;

fn cell_feature(fid: u64, population: f64, area: f64) -> MapFeature {
    let properties = FeatureProperties {
        fid: Some(fid),
        core_name: Some("Khimki".to_owned()),
        l1_class: Some("city".to_owned()),
        l2_class: Some("dense town".to_owned()),
        population: Some(population),
        area: Some(area),
        ..FeatureProperties::default()
    };
    let geometry = FeatureGeometry::Polygon(vec![vec![
        [37.0, 55.0],
        [37.2, 55.0],
        [37.2, 55.1],
        [37.0, 55.1],
    ]]);
    MapFeature::new(properties, geometry)
}

fn municipality_feature() -> MapFeature {
    let properties = FeatureProperties {
        fid: Some(7),
        name: Some("Odintsovo district".to_owned()),
        degurba_total: Some(400_000.0),
        degurba_30: Some(250_000.0),
        degurba_20: Some(100_000.0),
        degurba_10: Some(50_000.0),
        degurba_23: Some(60_000.0),
        degurba_22: Some(30_000.0),
        degurba_21: Some(10_000.0),
        degurba_13: Some(40_000.0),
        degurba_12: Some(8_000.0),
        degurba_11: Some(2_000.0),
        ..FeatureProperties::default()
    };
    let geometry = FeatureGeometry::Polygon(vec![vec![[36.0, 55.0], [38.0, 55.0], [38.0, 56.0]]]);
    MapFeature::new(properties, geometry)
}

fn region_feature() -> MapFeature {
    let properties = FeatureProperties {
        fid: Some(50),
        region: Some("Moscow oblast".to_owned()),
        degurba_total: Some(8_500_000.0),
        degurba_30: Some(5_000_000.0),
        degurba_20: Some(2_500_000.0),
        degurba_10: Some(1_000_000.0),
        ..FeatureProperties::default()
    };
    let geometry = FeatureGeometry::Polygon(vec![vec![[35.0, 54.0], [40.0, 54.0], [40.0, 57.0]]]);
    MapFeature::new(properties, geometry)
}

fn engine_with_defaults() -> DashboardEngine<NullRenderer> {
    DashboardEngine::new(NullRenderer::default(), DashboardConfig::new()).expect("engine init")
}

#[test]
fn invalid_preview_viewport_is_rejected_at_init() {
    let config = DashboardConfig::new().with_preview_viewport(Viewport::new(0, 50));
    let result = DashboardEngine::new(NullRenderer::default(), config);
    assert!(result.is_err());
}

#[test]
fn config_bootstrap_applies_display_and_camera() {
    let config = DashboardConfig::new()
        .with_display(DisplayOptions {
            granularity: ClassGranularity::Level1,
            volumetric: true,
        })
        .with_camera(CameraState {
            longitude: 60.6,
            latitude: 56.8,
            zoom: 7.0,
        });
    let mut engine = DashboardEngine::new(NullRenderer::default(), config).expect("engine init");

    assert_eq!(engine.display().granularity, ClassGranularity::Level1);
    assert!(engine.display().volumetric);
    assert_eq!(engine.camera().zoom, 7.0);
    // Zoom 7 sits past the upper extrusion stop.
    assert_eq!(
        engine.extrusion_height_for(&cell_feature(1, 1_000.0, 10.0)),
        200.0
    );

    engine.handle_click(FeatureClick::new(
        MapLayerKind::Cell,
        cell_feature(1, 1_000.0, 10.0),
    ));
    assert!(engine.render_preview().expect("render"));
    let renderer = engine.into_renderer();
    assert_eq!(renderer.frames_rendered, 1);
}

#[test]
fn dashboard_unlocks_after_municipality_and_region_are_selected() {
    let mut engine = engine_with_defaults();
    assert!(engine.selection().show_intro());
    assert!(!engine.dashboard_ready());

    engine.handle_click(FeatureClick::new(
        MapLayerKind::Municipality,
        municipality_feature(),
    ));
    assert!(!engine.selection().show_intro());
    assert!(!engine.dashboard_ready());

    engine.handle_click(FeatureClick::new(MapLayerKind::Region, region_feature()));
    assert!(engine.dashboard_ready());
}

#[test]
fn one_pointer_event_can_select_all_three_layers() {
    let mut engine = engine_with_defaults();
    engine.handle_clicks([
        FeatureClick::new(MapLayerKind::Cell, cell_feature(1, 1_000.0, 10.0)),
        FeatureClick::new(MapLayerKind::Municipality, municipality_feature()),
        FeatureClick::new(MapLayerKind::Region, region_feature()),
    ]);

    assert_eq!(engine.highlight_fid(MapLayerKind::Cell), Some(1));
    assert_eq!(engine.highlight_fid(MapLayerKind::Municipality), Some(7));
    assert_eq!(engine.highlight_fid(MapLayerKind::Region), Some(50));
    assert!(engine.dashboard_ready());
}

#[test]
fn reclicking_a_layer_replaces_only_that_selection() {
    let mut engine = engine_with_defaults();
    engine.handle_clicks([
        FeatureClick::new(MapLayerKind::Cell, cell_feature(1, 1_000.0, 10.0)),
        FeatureClick::new(MapLayerKind::Municipality, municipality_feature()),
    ]);
    engine.handle_click(FeatureClick::new(
        MapLayerKind::Cell,
        cell_feature(2, 500.0, 5.0),
    ));

    assert_eq!(engine.highlight_fid(MapLayerKind::Cell), Some(2));
    assert_eq!(engine.highlight_fid(MapLayerKind::Municipality), Some(7));
}

#[test]
fn cell_summary_swatch_follows_granularity_but_label_stays_detailed() {
    let mut engine = engine_with_defaults();
    engine.handle_click(FeatureClick::new(
        MapLayerKind::Cell,
        cell_feature(1, 1_234_567.0, 100.0),
    ));

    let summary = engine.cell_summary().expect("summary");
    assert_eq!(summary.cluster_name, "Khimki");
    assert_eq!(summary.class_label.as_deref(), Some("dense town"));
    assert_eq!(summary.class_color_hex, "#742602");
    assert_eq!(summary.population_display, "1 234 567");
    assert_eq!(summary.density_display.as_deref(), Some("12 345.7"));

    engine.toggle_granularity();
    let summary = engine.cell_summary().expect("summary");
    assert_eq!(summary.class_label.as_deref(), Some("dense town"));
    assert_eq!(summary.class_color_hex, "#fe0000");
}

#[test]
fn area_summaries_carry_titles_totals_and_charts() {
    let mut engine = engine_with_defaults();
    assert!(engine.municipality_summary().is_none());
    assert!(engine.region_summary().is_none());

    engine.handle_clicks([
        FeatureClick::new(MapLayerKind::Municipality, municipality_feature()),
        FeatureClick::new(MapLayerKind::Region, region_feature()),
    ]);

    let mun = engine.municipality_summary().expect("municipality");
    assert_eq!(mun.title, "Odintsovo district");
    assert_eq!(mun.total_population, 400_000.0);
    assert_eq!(mun.total_display, "400 000");
    assert_eq!(mun.breakdown.slices.len(), 7);
    assert_eq!(mun.breakdown.slices[0].population, 250_000.0);
    assert_eq!(mun.breakdown.slices[1].population, 60_000.0);

    let reg = engine.region_summary().expect("region");
    assert_eq!(reg.title, "Moscow oblast");
    assert_eq!(reg.total_display, "8 500 000");

    engine.set_granularity(ClassGranularity::Level1);
    let mun = engine.municipality_summary().expect("municipality");
    let populations: Vec<_> = mun.breakdown.slices.iter().map(|s| s.population).collect();
    assert_eq!(populations, [250_000.0, 100_000.0, 50_000.0]);
}

#[test]
fn legend_follows_the_granularity_toggle() {
    let mut engine = engine_with_defaults();
    assert_eq!(engine.legend().len(), 7);
    assert_eq!(engine.display().granularity, ClassGranularity::Level2);

    engine.toggle_granularity();
    let legend = engine.legend();
    assert_eq!(legend.len(), 3);
    assert_eq!(legend[1].label, "town and semi-dense area");

    engine.toggle_granularity();
    assert_eq!(engine.legend().len(), 7);
}

#[test]
fn extrusion_ramps_with_zoom_when_volumetric() {
    let mut engine = engine_with_defaults();
    let cell = cell_feature(1, 1_000.0, 10.0);

    assert_eq!(engine.extrusion_height_for(&cell), 0.0);

    engine.toggle_volumetric();
    assert_eq!(engine.extrusion_height_for(&cell), 200.0);

    engine
        .set_camera(CameraState {
            zoom: 4.0,
            ..CameraState::default()
        })
        .expect("camera");
    assert_eq!(engine.extrusion_height_for(&cell), 100.0);

    engine
        .set_camera(CameraState {
            zoom: 3.0,
            ..CameraState::default()
        })
        .expect("camera");
    assert_eq!(engine.extrusion_height_for(&cell), 0.0);

    engine
        .set_camera(CameraState {
            zoom: 9.0,
            ..CameraState::default()
        })
        .expect("camera");
    assert_eq!(engine.extrusion_height_for(&cell), 200.0);

    let flat_cell = cell_feature(2, 1_000.0, 0.0);
    assert_eq!(engine.extrusion_height_for(&flat_cell), 0.0);
}

#[test]
fn camera_rejects_non_finite_values() {
    let mut engine = engine_with_defaults();
    let result = engine.set_camera(CameraState {
        zoom: f64::NAN,
        ..CameraState::default()
    });
    assert!(result.is_err());
}

#[test]
fn preview_projects_the_selected_cell_boundary() {
    let mut engine = engine_with_defaults();
    assert!(engine.build_preview().expect("preview").is_none());

    engine.handle_click(FeatureClick::new(
        MapLayerKind::Cell,
        cell_feature(1, 1_000.0, 10.0),
    ));
    let frame = engine.build_preview().expect("preview").expect("frame");

    assert_eq!(frame.viewport, Viewport::new(50, 50));
    assert_eq!(frame.polygons.len(), 1);
    let polygon = &frame.polygons[0];
    assert_eq!(polygon.points.len(), 4);
    assert_eq!(polygon.fill.to_hex(), "#742602");
    assert_eq!((polygon.points[0].x, polygon.points[0].y), (0.0, 50.0));
    assert_eq!((polygon.points[2].x, polygon.points[2].y), (50.0, 0.0));
}

#[test]
fn cell_without_coordinates_previews_nothing() {
    let mut engine = engine_with_defaults();
    let empty = MapFeature::new(
        FeatureProperties {
            fid: Some(9),
            ..FeatureProperties::default()
        },
        FeatureGeometry::Polygon(Vec::new()),
    );
    engine.handle_click(FeatureClick::new(MapLayerKind::Cell, empty));

    assert!(engine.build_preview().expect("preview").is_none());
    assert!(!engine.render_preview().expect("render"));
    assert_eq!(engine.renderer().frames_rendered, 0);
}

#[test]
fn render_preview_reports_whether_anything_was_drawn() {
    let mut engine = engine_with_defaults();
    assert!(!engine.render_preview().expect("render"));

    engine.handle_click(FeatureClick::new(
        MapLayerKind::Cell,
        cell_feature(1, 1_000.0, 10.0),
    ));
    assert!(engine.render_preview().expect("render"));
    assert_eq!(engine.renderer().frames_rendered, 1);
    assert_eq!(engine.renderer().last_polygon_count, 1);
}

#[test]
fn preview_viewport_can_be_resized_at_runtime() {
    let mut engine = engine_with_defaults();
    assert!(engine.set_preview_viewport(Viewport::new(70, 0)).is_err());

    engine
        .set_preview_viewport(Viewport::new(70, 70))
        .expect("resize");
    engine.handle_click(FeatureClick::new(
        MapLayerKind::Cell,
        cell_feature(1, 1_000.0, 10.0),
    ));
    let frame = engine.build_preview().expect("preview").expect("frame");
    assert_eq!(frame.viewport, Viewport::new(70, 70));
}

#[test]
fn clearing_the_selection_locks_the_dashboard_again() {
    let mut engine = engine_with_defaults();
    engine.handle_clicks([
        FeatureClick::new(MapLayerKind::Cell, cell_feature(1, 1_000.0, 10.0)),
        FeatureClick::new(MapLayerKind::Municipality, municipality_feature()),
        FeatureClick::new(MapLayerKind::Region, region_feature()),
    ]);
    assert!(engine.dashboard_ready());

    engine.clear_selection();
    assert!(engine.selection().show_intro());
    assert!(!engine.dashboard_ready());
    assert!(engine.cell_summary().is_none());
    assert!(engine.municipality_summary().is_none());
    assert_eq!(engine.highlight_fid(MapLayerKind::Region), None);
}
