use super::*;
use camino::{Utf8Path, Utf8PathBuf};
use popquery_core::sample::{sample_countries, sample_population};
use popquery_core::{DatasetSource, PopulationRecord};
use rstest::{fixture, rstest};
use std::fs;
use tempfile::TempDir;

#[fixture]
fn tmp() -> TempDir {
    TempDir::new().expect("failed to create temporary directory")
}

fn utf8(dir: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf8 temp path")
}

fn write(root: &Utf8Path, name: &str, contents: &str) {
    fs::write(root.join(name), contents).expect("write dataset file");
}

#[rstest]
fn seeds_every_missing_file(tmp: TempDir) {
    let root = utf8(&tmp);
    let dataset = JsonDataset::load(&root).expect("load seeded datasets");

    assert_eq!(
        dataset.seeded_files(),
        &[POPULATION_FILE, COUNTRIES_FILE, INDICATORS_FILE]
    );
    assert_eq!(dataset.population(), sample_population().as_slice());
    assert_eq!(dataset.countries(), sample_countries().as_slice());
    for name in [POPULATION_FILE, COUNTRIES_FILE, INDICATORS_FILE] {
        assert!(root.join(name).is_file(), "{name} should be written back");
    }
}

#[rstest]
fn written_sample_reloads_identically(tmp: TempDir) {
    let root = utf8(&tmp);
    let first = JsonDataset::load(&root).expect("seed datasets");
    let second = JsonDataset::load(&root).expect("reload datasets");

    assert!(second.seeded_files().is_empty());
    assert_eq!(first.population(), second.population());
    assert_eq!(first.countries(), second.countries());
    assert_eq!(first.indicators(), second.indicators());
}

#[rstest]
fn sample_files_use_four_space_indent(tmp: TempDir) {
    let root = utf8(&tmp);
    JsonDataset::load(&root).expect("seed datasets");
    let contents = fs::read_to_string(root.join(INDICATORS_FILE)).expect("read indicators");
    assert!(contents.starts_with("[\n    {\n        \"id\": \"SP.POP.TOTL\""));
}

#[rstest]
fn existing_files_are_used_verbatim(tmp: TempDir) {
    let root = utf8(&tmp);
    write(
        &root,
        POPULATION_FILE,
        r#"[{"year": 2001, "country": "Chile", "iso3_code": "CHL",
             "indicator_id": "SP.POP.TOTL", "description": "Total population",
             "value": 15500000, "status": "available", "unit": "people"}]"#,
    );
    write(
        &root,
        COUNTRIES_FILE,
        r#"[{"name": "Chile", "iso2_code": "CL", "iso3_code": "CHL"}]"#,
    );
    write(&root, INDICATORS_FILE, "[]");

    let dataset = JsonDataset::load(&root).expect("load datasets");
    assert!(dataset.seeded_files().is_empty());
    assert!(dataset.indicators().is_empty());

    let (population, countries, _) = dataset.into_collections();
    assert_eq!(
        population,
        vec![
            PopulationRecord::new(2001, "Chile", "CHL", "SP.POP.TOTL", 15_500_000)
                .with_description("Total population")
                .with_status("available")
                .with_unit("people")
        ]
    );
    assert_eq!(countries.len(), 1);
}

#[rstest]
fn only_missing_files_are_seeded(tmp: TempDir) {
    let root = utf8(&tmp);
    write(&root, COUNTRIES_FILE, "[]");

    let dataset = JsonDataset::load(&root).expect("load datasets");
    assert_eq!(dataset.seeded_files(), &[POPULATION_FILE, INDICATORS_FILE]);
    assert!(dataset.countries().is_empty());
}

#[rstest]
fn malformed_records_name_the_file(tmp: TempDir) {
    let root = utf8(&tmp);
    write(&root, POPULATION_FILE, r#"[{"year": "last year"}]"#);

    let err = JsonDataset::load(&root).expect_err("decoding should fail");
    match err {
        LoadError::Decode { path, .. } => assert_eq!(path, root.join(POPULATION_FILE)),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn missing_directory_is_created(tmp: TempDir) {
    let root = utf8(&tmp).join("nested").join("data");
    let dataset = JsonDataset::load(&root).expect("create and seed directory");
    assert_eq!(dataset.seeded_files().len(), 3);
    assert!(root.join(POPULATION_FILE).is_file());
}

#[rstest]
fn open_rejects_missing_directory(tmp: TempDir) {
    let root = utf8(&tmp).join("absent");
    let err = DataDir::open(&root).expect_err("directory does not exist");
    assert!(matches!(err, LoadError::OpenDir { .. }));
}

#[rstest]
fn read_reports_absent_files(tmp: TempDir) {
    let root = utf8(&tmp);
    let dir = DataDir::open(&root).expect("open temp dir");
    assert_eq!(dir.read("nothing.json").expect("lookup"), Lookup::Absent);
    dir.write("something.json", b"[]").expect("write file");
    assert_eq!(
        dir.read("something.json").expect("lookup"),
        Lookup::Found("[]".to_owned())
    );
}

#[rstest]
#[case("data/population", ".", "data/population")]
#[case("/srv/data", "/", "srv/data")]
#[case("", ".", "")]
#[case("/", "/", "")]
fn paths_split_into_anchor_and_remainder(
    #[case] path: &str,
    #[case] anchor: &str,
    #[case] below: &str,
) {
    let (found_anchor, found_below) = dir::split_anchor(Utf8Path::new(path));
    assert_eq!(found_anchor, Utf8PathBuf::from(anchor));
    assert_eq!(found_below, Utf8PathBuf::from(below));
}

#[rstest]
fn nested_directories_with_dot_components_are_created(tmp: TempDir) {
    let root = utf8(&tmp).join("a").join(".").join("b");
    let dir = DataDir::open_or_create(&root).expect("create nested directory");
    assert!(dir.path().is_dir());
}

#[rstest]
fn encoded_records_keep_non_ascii_text() {
    let countries = vec![
        popquery_core::CountryRecord::new("Perú", "PE", "PER"),
        popquery_core::CountryRecord::new("Côte d'Ivoire", "CI", "CIV"),
    ];
    let encoded = loader::encode_pretty(&countries).expect("encode countries");
    let text = String::from_utf8(encoded).expect("utf-8 output");
    assert!(text.contains("\"name\": \"Perú\""));
    assert!(text.contains("Côte d'Ivoire"));
    assert!(!text.contains("\\u"));
}

#[rstest]
fn non_ascii_files_load_unchanged(tmp: TempDir) {
    let root = utf8(&tmp);
    write(
        &root,
        COUNTRIES_FILE,
        r#"[{"name": "Estados Unidos", "iso2_code": "US", "iso3_code": "USA"},
            {"name": "Perú", "iso2_code": "PE", "iso3_code": "PER"}]"#,
    );
    let dataset = JsonDataset::load(&root).expect("load datasets");
    let names: Vec<&str> = dataset
        .countries()
        .iter()
        .map(|country| country.name.as_str())
        .collect();
    assert_eq!(names, ["Estados Unidos", "Perú"]);
}
