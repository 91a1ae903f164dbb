macro_rules! define_shared_cases {
    ($test_attr:meta) => {
// ── Codec ────────────────────────────────────────────────────────────────────

#[$test_attr]
fn geom_from_text_echoes_valid_input() {
    let db = ActiveTestDb::open();
    let wkt = db.query_text("SELECT geom_from_text('POINT(1 2)')");
    assert_eq!(wkt, "POINT(1 2)");
}

#[$test_attr]
fn as_text_normalizes_and_is_stable() {
    let db = ActiveTestDb::open();
    let once = db.query_text("SELECT as_text('POLYGON((0 0,1 0,1 1,0 1,0 0))')");
    assert!(once.starts_with("POLYGON"), "got: {once}");
    let twice = db.query_text(&format!("SELECT as_text('{once}')"));
    assert_eq!(once, twice);
}

#[$test_attr]
fn point_empty_round_trip() {
    let db = ActiveTestDb::open();
    let wkt = db.query_text("SELECT as_text('POINT EMPTY')");
    assert_eq!(wkt, "POINT EMPTY");
}

#[$test_attr]
fn overflowing_coordinate_is_malformed() {
    let db = ActiveTestDb::open();
    let err = db.query_error("SELECT as_text('POINT(1e400 0)')");
    assert!(err.starts_with("as_text: malformed geometry"), "got: {err}");

    let err = db.query_error("SELECT centroid('POLYGON((0 0,1e400 0,1 1,0 0))')");
    assert!(err.starts_with("centroid:"), "got: {err}");
}

#[$test_attr]
fn malformed_wkt_raises_named_error() {
    let db = ActiveTestDb::open();
    let err = db.query_error("SELECT geom_from_text('POLYGON((0 0, 1 1')");
    assert!(err.starts_with("geom_from_text:"), "got: {err}");

    let err = db.query_error("SELECT area('not a geometry')");
    assert!(err.starts_with("area:"), "got: {err}");
}

// ── Measurement ──────────────────────────────────────────────────────────────

#[$test_attr]
fn area_of_triangle() {
    let db = ActiveTestDb::open();
    let a = db.query_f64("SELECT area('POLYGON((10 10,20 10,20 20,10 10))')");
    assert!((a - 50.0).abs() < 1e-10, "area = {a}");
}

#[$test_attr]
fn area_of_point_is_zero() {
    let db = ActiveTestDb::open();
    let a = db.query_f64("SELECT area('POINT(3 4)')");
    assert_eq!(a, 0.0);
}

#[$test_attr]
fn length_of_linestring_and_polygon_boundary() {
    let db = ActiveTestDb::open();
    let l = db.query_f64("SELECT length('LINESTRING(0 0,3 4)')");
    assert!((l - 5.0).abs() < 1e-10, "length = {l}");

    let p = db.query_f64("SELECT length('POLYGON((0 0,10 0,10 10,0 10,0 0))')");
    assert!((p - 40.0).abs() < 1e-10, "perimeter = {p}");
}

#[$test_attr]
fn length_of_point_is_null() {
    let db = ActiveTestDb::open();
    assert!(db.query_is_null("SELECT length('POINT(1 1)')"));
}

#[$test_attr]
fn centroid_of_triangle() {
    let db = ActiveTestDb::open();
    let c = "centroid('POLYGON((10 10,20 10,20 20,10 10))')";
    let x = db.query_f64(&format!("SELECT coordinate_x({c})"));
    let y = db.query_f64(&format!("SELECT coordinate_y({c})"));
    assert!((x - 50.0 / 3.0).abs() < 1e-10, "x = {x}");
    assert!((y - 40.0 / 3.0).abs() < 1e-10, "y = {y}");
}

#[$test_attr]
fn centroid_of_empty_is_null() {
    let db = ActiveTestDb::open();
    assert!(db.query_is_null("SELECT centroid('POLYGON EMPTY')"));
}

#[$test_attr]
fn distance_between_points() {
    let db = ActiveTestDb::open();
    let d = db.query_f64("SELECT distance('POINT(0 0)', 'POINT(3 4)')");
    assert!((d - 5.0).abs() < 1e-10, "distance = {d}");
}

#[$test_attr]
fn distance_is_symmetric_and_zero_to_self() {
    let db = ActiveTestDb::open();
    let a = "'LINESTRING(0 0,10 0)'";
    let b = "'POLYGON((2 3,4 3,4 5,2 5,2 3))'";
    let ab = db.query_f64(&format!("SELECT distance({a}, {b})"));
    let ba = db.query_f64(&format!("SELECT distance({b}, {a})"));
    assert_eq!(ab, ba);
    assert!((ab - 3.0).abs() < 1e-10, "distance = {ab}");

    let zero = db.query_f64(&format!("SELECT distance({b}, {b})"));
    assert_eq!(zero, 0.0);
}

// ── Operations ───────────────────────────────────────────────────────────────

#[$test_attr]
fn buffer_point_is_disc() {
    let db = ActiveTestDb::open();
    let disc = "buffer('POINT(10 10)', 5)";
    let wkt = db.query_text(&format!("SELECT {disc}"));
    assert!(wkt.starts_with("POLYGON"), "got: {wkt}");

    let expected = std::f64::consts::PI * 25.0;
    let a = db.query_f64(&format!("SELECT area({disc})"));
    assert!((a - expected).abs() / expected < 0.03, "area = {a}");

    let x = db.query_f64(&format!("SELECT coordinate_x(centroid({disc}))"));
    let y = db.query_f64(&format!("SELECT coordinate_y(centroid({disc}))"));
    assert!((x - 10.0).abs() < 1e-4, "x = {x}");
    assert!((y - 10.0).abs() < 1e-4, "y = {y}");
}

#[$test_attr]
fn buffer_negative_erodes() {
    let db = ActiveTestDb::open();
    let a = db.query_f64("SELECT area(buffer('POLYGON((0 0,10 0,10 10,0 10,0 0))', -1.0))");
    assert!((a - 64.0).abs() < 1e-2, "area = {a}");

    let gone = db.query_text("SELECT buffer('POLYGON((0 0,10 0,10 10,0 10,0 0))', -6.0)");
    assert_eq!(gone, "POLYGON EMPTY");
}

#[$test_attr]
fn buffer_ignores_empty_interior_ring() {
    let db = ActiveTestDb::open();
    let wkt = db.query_text("SELECT buffer('POLYGON((0 0,1 0,1 1,0 0),EMPTY)', 1.0)");
    assert!(wkt.starts_with("POLYGON"), "got: {wkt}");
    let a = db.query_f64("SELECT area(buffer('POLYGON((0 0,1 0,1 1,0 0),EMPTY)', 1.0))");
    let b = db.query_f64("SELECT area(buffer('POLYGON((0 0,1 0,1 1,0 0))', 1.0))");
    assert_eq!(a, b);
}

#[$test_attr]
fn buffer_rejects_non_finite_distance() {
    let db = ActiveTestDb::open();
    let err = db.query_error("SELECT buffer('POINT(0 0)', 1e999)");
    assert!(err.starts_with("buffer:"), "got: {err}");
}

#[$test_attr]
fn buffer_rejects_text_distance() {
    let db = ActiveTestDb::open();
    let err = db.query_error("SELECT buffer('POINT(0 0)', 'far')");
    assert!(err.contains("distance"), "got: {err}");
}

// ── Accessors and constructors ───────────────────────────────────────────────

#[$test_attr]
fn coordinates_of_point() {
    let db = ActiveTestDb::open();
    assert_eq!(db.query_f64("SELECT coordinate_x('POINT(1.5 -2.25)')"), 1.5);
    assert_eq!(db.query_f64("SELECT coordinate_y('POINT(1.5 -2.25)')"), -2.25);
}

#[$test_attr]
fn coordinates_of_non_point_are_null() {
    let db = ActiveTestDb::open();
    assert!(db.query_is_null("SELECT coordinate_x('POLYGON((0 0,1 0,1 1,0 0))')"));
    assert!(db.query_is_null("SELECT coordinate_y('LINESTRING(0 0,1 1)')"));
    assert!(db.query_is_null("SELECT coordinate_x('POINT EMPTY')"));
}

#[$test_attr]
fn point_constructor_round_trips_through_accessors() {
    let db = ActiveTestDb::open();
    assert_eq!(db.query_f64("SELECT coordinate_x(point(3, 4))"), 3.0);
    assert_eq!(db.query_f64("SELECT coordinate_y(point(3, 4.5))"), 4.5);
    let d = db.query_f64("SELECT distance(point(0, 0), point(3, 4))");
    assert!((d - 5.0).abs() < 1e-10, "distance = {d}");
}

// ── Marshaling ───────────────────────────────────────────────────────────────

#[$test_attr]
fn null_argument_yields_null() {
    let db = ActiveTestDb::open();
    assert!(db.query_is_null("SELECT area(NULL)"));
    assert!(db.query_is_null("SELECT buffer('POINT(0 0)', NULL)"));
    assert!(db.query_is_null("SELECT buffer(NULL, 1.0)"));
    assert!(db.query_is_null("SELECT distance('POINT(0 0)', NULL)"));
    assert!(db.query_is_null("SELECT geom_from_text(NULL)"));
}

#[$test_attr]
fn numeric_geometry_is_type_mismatch() {
    let db = ActiveTestDb::open();
    let err = db.query_error("SELECT area(42)");
    assert!(err.starts_with("area:"), "got: {err}");
    assert!(err.contains("INTEGER"), "got: {err}");
}

#[$test_attr]
fn blob_argument_is_type_mismatch() {
    let db = ActiveTestDb::open();
    let err = db.query_error("SELECT area(X'00')");
    assert!(err.contains("BLOB"), "got: {err}");
}

#[$test_attr]
fn wrong_arity_is_unknown_function() {
    let db = ActiveTestDb::open();
    let err = db.query_error("SELECT buffer('POINT(0 0)')");
    assert!(err.contains("buffer"), "got: {err}");
}

// ── Registration ─────────────────────────────────────────────────────────────

/// Apply a chain of calls like `"f(g"` to the test triangle.
fn wrap(calls: &str) -> String {
    let depth = calls.matches('(').count() + 1;
    format!("{calls}('POLYGON((10 10,20 10,20 20,10 10))'{}", ")".repeat(depth))
}

#[$test_attr]
fn ogc_aliases_match_canonical_names() {
    let db = ActiveTestDb::open();
    let pairs = [
        ("area", "ST_Area"),
        ("length", "ST_Length"),
        ("coordinate_x(centroid", "ST_X(ST_Centroid"),
        ("coordinate_y(centroid", "ST_Y(ST_Centroid"),
    ];
    for (canonical, alias) in pairs {
        let a = db.query_f64(&format!("SELECT {}", wrap(canonical)));
        let b = db.query_f64(&format!("SELECT {}", wrap(alias)));
        assert_eq!(a, b, "{canonical} vs {alias}");
    }
    let wkt = db.query_text("SELECT ST_AsText(ST_GeomFromText('POINT(1 2)'))");
    assert_eq!(wkt, db.query_text("SELECT as_text('POINT(1 2)')"));
    let d = db.query_f64("SELECT ST_Distance(ST_Point(0, 0), 'POINT(3 4)')");
    assert!((d - 5.0).abs() < 1e-10, "distance = {d}");
}

#[$test_attr]
fn names_are_case_insensitive() {
    let db = ActiveTestDb::open();
    let a = db.query_f64("SELECT AREA('POLYGON((10 10,20 10,20 20,10 10))')");
    assert!((a - 50.0).abs() < 1e-10, "area = {a}");
}

#[$test_attr]
fn functions_are_usable_in_index_expressions() {
    // SQLite only admits deterministic functions in index expressions.
    let db = ActiveTestDb::open();
    db.exec("CREATE TABLE shapes (id INTEGER PRIMARY KEY, geom TEXT)");
    db.exec("CREATE INDEX shapes_area ON shapes (area(geom))");
    db.exec("INSERT INTO shapes (geom) VALUES ('POLYGON((0 0,2 0,2 2,0 2,0 0))')");
    let n = db.query_i64("SELECT count(*) FROM shapes WHERE area(geom) = 4.0");
    assert_eq!(n, 1);
}

#[$test_attr]
fn repeated_calls_are_identical() {
    let db = ActiveTestDb::open();
    let sql = "SELECT buffer('LINESTRING(0 0,5 5)', 0.5)";
    assert_eq!(db.query_text(sql), db.query_text(sql));
}

#[$test_attr]
fn install_twice_replaces_bindings() {
    let db = ActiveTestDb::open();
    unsafe {
        wktlite_sqlite::install(db.0).expect("second install");
    }
    let d = db.query_f64("SELECT distance('POINT(0 0)', 'POINT(3 4)')");
    assert!((d - 5.0).abs() < 1e-10, "distance = {d}");
}

// ── Table scans ──────────────────────────────────────────────────────────────

#[$test_attr]
fn scan_over_table_column() {
    let db = ActiveTestDb::open();
    db.exec("CREATE TABLE parcels (id INTEGER PRIMARY KEY, geom TEXT)");
    db.exec(
        "INSERT INTO parcels (geom) VALUES \
         ('POLYGON((0 0,10 0,10 10,0 10,0 0))'), \
         (NULL), \
         ('POINT(5 5)')",
    );
    let areas = db.query_all_f64("SELECT area(geom) FROM parcels ORDER BY id");
    assert_eq!(areas, vec![Some(100.0), None, Some(0.0)]);

    let total = db.query_f64("SELECT sum(area(buffer(geom, 1.0))) FROM parcels");
    assert!(total > 100.0, "total = {total}");
}

#[$test_attr]
fn malformed_row_aborts_scan() {
    let db = ActiveTestDb::open();
    db.exec("CREATE TABLE parcels (id INTEGER PRIMARY KEY, geom TEXT)");
    db.exec(
        "INSERT INTO parcels (geom) VALUES \
         ('POLYGON((0 0,10 0,10 10,0 10,0 0))'), \
         ('POLYGON((0 0, garbage')",
    );
    let err = db.query_error("SELECT sum(area(geom)) FROM parcels");
    assert!(err.starts_with("area:"), "got: {err}");
}
    };
}
