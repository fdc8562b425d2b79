use std::path::Path;

fn main() {
    let objects_path = Path::new("catalogs/objects.json");
    validate_object_file(objects_path);
    set_build_dependencies();
}

fn validate_object_file(objects_path: &Path) {
    assert!(
        objects_path.exists(),
        "\n\nOBJECT DATABASE BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the object database before building.\n",
        objects_path.display()
    );

    let contents = std::fs::read_to_string(objects_path).unwrap_or_else(|e| {
        panic!(
            "\n\nOBJECT DATABASE BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            objects_path.display()
        );
    });

    let document: serde_json::Value = serde_json::from_str(&contents).unwrap_or_else(|e| {
        panic!(
            "\n\nOBJECT DATABASE BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            objects_path.display()
        );
    });

    validate_document_structure(&document);
}

fn validate_document_structure(document: &serde_json::Value) {
    assert!(
        document.is_object(),
        "\n\nOBJECT DATABASE BUILD ERROR: Root must be a JSON object\n\
         Got: {document}\n"
    );

    for field in ["version", "created_at"] {
        assert!(
            document.get(field).is_some_and(serde_json::Value::is_string),
            "\n\nOBJECT DATABASE BUILD ERROR: Missing string field '{field}'\n"
        );
    }

    let objects = document.get("objects").unwrap_or_else(|| {
        panic!(
            "\n\nOBJECT DATABASE BUILD ERROR: Missing 'objects' field\n\
             The document must have a top-level 'objects' array.\n"
        );
    });

    let objects = objects.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nOBJECT DATABASE BUILD ERROR: 'objects' must be an array\n\
             Got: {objects}\n"
        );
    });

    let total_links = validate_objects(objects);

    println!(
        "cargo:warning=Validated object database: {} objects, {total_links} cross-identifications",
        objects.len()
    );
}

fn validate_objects(objects: &[serde_json::Value]) -> usize {
    let mut total_links = 0;

    for (i, object) in objects.iter().enumerate() {
        let index = object
            .get("index")
            .and_then(|v| v.as_str())
            .unwrap_or("<unknown>");

        validate_object_fields(object, index, i);
        total_links += validate_object_links(object, index);
    }

    total_links
}

fn validate_object_fields(object: &serde_json::Value, index: &str, position: usize) {
    assert!(
        object
            .get("index")
            .and_then(|v| v.as_str())
            .is_some_and(|s| !s.trim().is_empty()),
        "\n\nOBJECT DATABASE BUILD ERROR: Object at position {position} missing 'index' field\n"
    );

    if let Some(ra) = object.get("ra").and_then(serde_json::Value::as_f64) {
        assert!(
            (0.0..24.0).contains(&ra),
            "\n\nOBJECT DATABASE BUILD ERROR: Object '{index}' has RA {ra} outside [0, 24) hours\n"
        );
    }

    if let Some(dec) = object.get("dec").and_then(serde_json::Value::as_f64) {
        assert!(
            (-90.0..=90.0).contains(&dec),
            "\n\nOBJECT DATABASE BUILD ERROR: Object '{index}' has Dec {dec} outside [-90, 90] degrees\n"
        );
    }
}

fn validate_object_links(object: &serde_json::Value, index: &str) -> usize {
    let mut links = 0;
    for field in ["cross_ids", "duplicate_of", "common_names"] {
        let Some(value) = object.get(field) else {
            continue;
        };
        let entries = value.as_array().unwrap_or_else(|| {
            panic!(
                "\n\nOBJECT DATABASE BUILD ERROR: Object '{index}' field '{field}' must be an array\n"
            );
        });
        assert!(
            entries.iter().all(serde_json::Value::is_string),
            "\n\nOBJECT DATABASE BUILD ERROR: Object '{index}' field '{field}' must only hold strings\n"
        );
        if field != "common_names" {
            links += entries.len();
        }
    }
    links
}

fn set_build_dependencies() {
    println!("cargo:rerun-if-changed=catalogs/objects.json");
    println!("cargo:rerun-if-changed=build.rs");
}
