#![no_main]

use arbitrary::Arbitrary;
use clampos::{Point, Rect, Size, normalize_detailed};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    pointer: (f64, f64),
    target: (f64, f64),
    scope: (f64, f64, f64, f64),
    viewport: (f64, f64),
}

fuzz_target!(|input: Input| {
    let pointer = Point::from(input.pointer);
    let target = Size::from(input.target);
    let (left, top, width, height) = input.scope;
    let scope = Rect::new(left, top, width, height);
    let viewport = Size::from(input.viewport);

    let res = normalize_detailed(pointer, target, scope, viewport);
    let out = res.point;

    // Post-conditions that must always hold:
    if res.overflow.viewport_x {
        assert_eq!(
            out.normalized_x.to_bits(),
            (viewport.width - target.width).to_bits(),
            "viewport correction lost on x"
        );
    } else if !res.overflow.scope_x {
        assert_eq!(out.normalized_x.to_bits(), pointer.x.to_bits(), "x moved without overflow");
    }
    if res.overflow.viewport_y {
        assert_eq!(
            out.normalized_y.to_bits(),
            (viewport.height - target.height).to_bits(),
            "viewport correction lost on y"
        );
    } else if !res.overflow.scope_y {
        assert_eq!(out.normalized_y.to_bits(), pointer.y.to_bits(), "y moved without overflow");
    }
});
