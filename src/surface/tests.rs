// SPDX-FileCopyrightText: The ecard authors
// SPDX-License-Identifier: MPL-2.0

use super::*;

#[test]
fn control_ids_round_trip_through_element_ids() {
    for id in ControlId::ALL {
        assert_eq!(Ok(id), id.to_string().parse());
    }
    assert_eq!("eliteCtaBtn", ControlId::EliteCtaBtn.to_string());
    assert!("qrImg".parse::<ControlId>().is_err());
}

#[test]
fn memory_surface_creates_anchors_for_links() {
    let surface = MemorySurface::with_all_controls();
    assert!(surface.get(ControlId::CallBtn).unwrap().is_anchor());
    assert!(surface.get(ControlId::SiteLink).unwrap().is_anchor());
    assert!(!surface.get(ControlId::PhoneTile).unwrap().is_anchor());
    assert!(!surface.get(ControlId::QrBtn).unwrap().is_anchor());
}

#[test]
fn empty_style_value_removes_the_property() {
    let mut control = MemoryControl::element();
    control.set_style("opacity", "0.45");
    assert_eq!(Some("0.45"), control.style("opacity"));
    control.set_style("opacity", "");
    assert_eq!(None, control.style("opacity"));
}

#[test]
fn classes_are_a_set() {
    let mut control = MemoryControl::element();
    control.add_class("open");
    control.add_class("open");
    control.add_class("elite");
    assert_eq!("elite open", control.class_name());
    control.remove_class("open");
    assert!(!control.has_class("open"));
}

#[test]
fn missing_controls_are_skipped() {
    let mut surface = MemorySurface::empty();
    assert!(with_control(&mut surface, ControlId::Title, |control| control.set_text("x")).is_none());
    surface.insert(ControlId::Title, MemoryControl::element());
    assert!(with_control(&mut surface, ControlId::Title, |control| control.set_text("x")).is_some());
    assert_eq!("x", surface.get(ControlId::Title).unwrap().text());
}
