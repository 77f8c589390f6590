//! Dependency materializer behavior against fixture CEF exports.

mod common;

use cef_bundle::DependencyManifest;
use cef_bundle::packager::materialize::materialize;

#[tokio::test]
async fn copies_listed_files_byte_identical() {
    let tmp = tempfile::tempdir().unwrap();
    let cef = tmp.path().join("cef-export");
    common::write_file(&cef.join("libcef.dll"), b"cef library bytes");
    common::write_file(&cef.join("resources.pak"), b"resource pack");
    common::write_file(&cef.join("icudtl.dat"), b"icu data");

    let source = common::source_at(&cef).await;
    let settings = common::settings_for(tmp.path()).build().unwrap();

    materialize(&settings, &source, &DependencyManifest::windows())
        .await
        .unwrap();

    let build = settings.build_output_dir();
    assert_eq!(
        std::fs::read(build.join("libcef.dll")).unwrap(),
        b"cef library bytes"
    );
    assert_eq!(
        std::fs::read(build.join("resources.pak")).unwrap(),
        b"resource pack"
    );
    assert_eq!(std::fs::read(build.join("icudtl.dat")).unwrap(), b"icu data");
}

#[tokio::test]
async fn missing_source_files_are_tolerated() {
    let tmp = tempfile::tempdir().unwrap();
    let cef = tmp.path().join("cef-export");
    common::write_file(&cef.join("resources.pak"), b"resource pack");

    let source = common::source_at(&cef).await;
    let settings = common::settings_for(tmp.path()).build().unwrap();

    // Everything else in the manifest is absent; that is only a warning.
    materialize(&settings, &source, &DependencyManifest::windows())
        .await
        .unwrap();

    let build = settings.build_output_dir();
    assert!(build.join("resources.pak").is_file());
    assert!(!build.join("libcef.dll").exists());
}

#[tokio::test]
async fn overwrites_stale_files_in_build_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let cef = tmp.path().join("cef-export");
    common::write_file(&cef.join("resources.pak"), b"fresh");

    let source = common::source_at(&cef).await;
    let settings = common::settings_for(tmp.path()).build().unwrap();
    common::write_file(&settings.build_output_dir().join("resources.pak"), b"stale");

    materialize(&settings, &source, &DependencyManifest::windows())
        .await
        .unwrap();

    assert_eq!(
        std::fs::read(settings.build_output_dir().join("resources.pak")).unwrap(),
        b"fresh"
    );
}

#[tokio::test]
async fn release_subdirectory_supersedes_root() {
    let tmp = tempfile::tempdir().unwrap();
    let cef = tmp.path().join("cef-export");
    common::write_file(&cef.join("resources.pak"), b"from root");
    common::write_file(&cef.join("Release").join("resources.pak"), b"from release");

    let source = common::source_at(&cef).await;
    assert_eq!(source.bin_dir(), cef.join("Release"));

    let settings = common::settings_for(tmp.path()).build().unwrap();
    materialize(&settings, &source, &DependencyManifest::windows())
        .await
        .unwrap();

    assert_eq!(
        std::fs::read(settings.build_output_dir().join("resources.pak")).unwrap(),
        b"from release"
    );
}

#[tokio::test]
async fn min_locales_ships_only_english() {
    let tmp = tempfile::tempdir().unwrap();
    let cef = tmp.path().join("cef-export");
    common::write_file(&cef.join("locales/en-US.pak"), b"english");
    common::write_file(&cef.join("locales/fr.pak"), b"french");
    common::write_file(&cef.join("locales/de.pak"), b"german");

    let source = common::source_at(&cef).await;
    let settings = common::settings_for(tmp.path()).build().unwrap();
    materialize(&settings, &source, &DependencyManifest::windows())
        .await
        .unwrap();

    let locales = settings.build_output_dir().join("locales");
    assert_eq!(common::list_names(&locales), vec!["en-US.pak"]);
    assert_eq!(std::fs::read(locales.join("en-US.pak")).unwrap(), b"english");
}

#[tokio::test]
async fn full_locales_copies_every_pack() {
    let tmp = tempfile::tempdir().unwrap();
    let cef = tmp.path().join("cef-export");
    common::write_file(&cef.join("locales/en-US.pak"), b"english");
    common::write_file(&cef.join("locales/fr.pak"), b"french");

    let source = common::source_at(&cef).await;
    let settings = common::settings_for(tmp.path())
        .min_locales(false)
        .build()
        .unwrap();
    materialize(&settings, &source, &DependencyManifest::windows())
        .await
        .unwrap();

    let locales = settings.build_output_dir().join("locales");
    assert_eq!(common::list_names(&locales), vec!["en-US.pak", "fr.pak"]);
}

#[tokio::test]
async fn stale_destination_locales_are_removed() {
    let tmp = tempfile::tempdir().unwrap();
    let cef = tmp.path().join("cef-export");
    common::write_file(&cef.join("locales/en-US.pak"), b"english");

    let source = common::source_at(&cef).await;
    let settings = common::settings_for(tmp.path()).build().unwrap();
    // A prior full-locale run left extra packs behind.
    common::write_file(
        &settings.build_output_dir().join("locales/zh-CN.pak"),
        b"stale",
    );

    materialize(&settings, &source, &DependencyManifest::windows())
        .await
        .unwrap();

    let locales = settings.build_output_dir().join("locales");
    assert_eq!(common::list_names(&locales), vec!["en-US.pak"]);
}

#[tokio::test]
async fn absent_locales_directory_is_skipped() {
    let tmp = tempfile::tempdir().unwrap();
    let cef = tmp.path().join("cef-export");
    common::write_file(&cef.join("resources.pak"), b"resource pack");

    let source = common::source_at(&cef).await;
    let settings = common::settings_for(tmp.path()).build().unwrap();
    materialize(&settings, &source, &DependencyManifest::windows())
        .await
        .unwrap();

    assert!(!settings.build_output_dir().join("locales").exists());
}

#[tokio::test]
async fn missing_english_pack_leaves_locales_empty() {
    let tmp = tempfile::tempdir().unwrap();
    let cef = tmp.path().join("cef-export");
    common::write_file(&cef.join("locales/fr.pak"), b"french");

    let source = common::source_at(&cef).await;
    let settings = common::settings_for(tmp.path()).build().unwrap();
    materialize(&settings, &source, &DependencyManifest::windows())
        .await
        .unwrap();

    let locales = settings.build_output_dir().join("locales");
    assert!(locales.is_dir());
    assert!(common::list_names(&locales).is_empty());
}

#[tokio::test]
async fn dx_compiler_files_are_gated() {
    let tmp = tempfile::tempdir().unwrap();
    let cef = tmp.path().join("cef-export");
    common::write_file(&cef.join("dxcompiler.dll"), b"dxc");
    common::write_file(&cef.join("dxil.dll"), b"dxil");

    let source = common::source_at(&cef).await;

    let settings = common::settings_for(tmp.path()).build().unwrap();
    materialize(&settings, &source, &DependencyManifest::windows())
        .await
        .unwrap();
    assert!(!settings.build_output_dir().join("dxcompiler.dll").exists());

    let settings = common::settings_for(tmp.path())
        .include_dx_compiler(true)
        .build()
        .unwrap();
    materialize(&settings, &source, &DependencyManifest::windows())
        .await
        .unwrap();
    assert!(settings.build_output_dir().join("dxcompiler.dll").is_file());
    assert!(settings.build_output_dir().join("dxil.dll").is_file());
}

#[tokio::test]
async fn cefsimple_manifest_is_copied_for_matching_example() {
    let tmp = tempfile::tempdir().unwrap();
    let cef = tmp.path().join("cef-export");
    common::write_file(&cef.join("resources.pak"), b"resource pack");
    common::write_file(
        &tmp.path()
            .join("cef/examples/cefsimple/win/cefsimple.exe.manifest"),
        b"<assembly/>",
    );

    let source = common::source_at(&cef).await;
    let settings = common::settings_for(tmp.path())
        .example("cefsimple")
        .build()
        .unwrap();
    materialize(&settings, &source, &DependencyManifest::windows())
        .await
        .unwrap();
    assert!(
        settings
            .build_output_dir()
            .join("cefsimple.exe.manifest")
            .is_file()
    );
}

#[tokio::test]
async fn other_examples_get_no_cefsimple_manifest() {
    let tmp = tempfile::tempdir().unwrap();
    let cef = tmp.path().join("cef-export");
    common::write_file(&cef.join("resources.pak"), b"resource pack");
    common::write_file(
        &tmp.path()
            .join("cef/examples/cefsimple/win/cefsimple.exe.manifest"),
        b"<assembly/>",
    );

    let source = common::source_at(&cef).await;
    let settings = common::settings_for(tmp.path()).build().unwrap();
    materialize(&settings, &source, &DependencyManifest::windows())
        .await
        .unwrap();
    assert!(
        !settings
            .build_output_dir()
            .join("cefsimple.exe.manifest")
            .exists()
    );
}
