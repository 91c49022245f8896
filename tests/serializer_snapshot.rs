//! Snapshot of a complete migrated theme.

use ttyvid_tools::theme::{parse_theme, render};

const SAMPLE: &str = "\
# Retro terminal frame
name Retro
background 0
title
    foreground 15
    x auto
    font Fira Code
layer
    file frame.png
    depth -1
    copy-mode copy
    outer-left 3
    dst-top 1.5
palette
    colors 2
    0 0 0
    255 255 255
";

#[test]
fn test_render_sample_theme() {
    let doc = parse_theme(SAMPLE);
    let rendered = render(&doc, "retro.theme").unwrap();

    insta::assert_snapshot!(rendered, @r"
    # Retro
    # Migrated from: retro.theme

    name: Retro
    background: 0
    title:
      foreground: 15
      x: auto
      font: Fira Code
    layers:
    - file: layers/frame.png
      depth: -1
      copy_mode: copy
      nineslice:
        outer_left: 3
      dst_bounds:
        top: 1.5
    palette:
      rgb:
      - - 0
        - 0
        - 0
      - - 255
        - 255
        - 255
      colors: 2
    ");
}

#[test]
fn test_render_empty_document() {
    let rendered = render(&parse_theme(""), "empty.theme").unwrap();
    assert!(rendered.starts_with("# Theme\n# Migrated from: empty.theme\n\n"));
}
