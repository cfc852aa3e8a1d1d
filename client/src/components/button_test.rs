use super::*;

#[test]
fn default_button_is_primary() {
    assert_eq!(button_class(ButtonVariant::default(), ButtonSize::default()), "btn btn--primary");
}

#[test]
fn secondary_button_class() {
    assert_eq!(button_class(ButtonVariant::Secondary, ButtonSize::Default), "btn btn--secondary");
}

#[test]
fn full_size_adds_modifier() {
    assert_eq!(button_class(ButtonVariant::Primary, ButtonSize::Full), "btn btn--primary btn--full");
}
