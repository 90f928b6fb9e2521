use super::*;

#[test]
fn create_fills_with_white_by_default() {
    let canvas = create_empty_image(3, 2, None).unwrap();
    assert_eq!(canvas.dimensions(), (3, 2));
    assert!(canvas.pixels().all(|p| *p == WHITE));
}

#[test]
fn create_fills_with_given_color() {
    let red = Rgba([255, 0, 0, 255]);
    let canvas = create_empty_image(2, 2, Some(red)).unwrap();
    assert!(canvas.pixels().all(|p| *p == red));
}

#[test]
fn create_rejects_zero_dimensions() {
    assert!(matches!(
        create_empty_image(0, 2, None),
        Err(PixelforgeError::InvalidDimension(_))
    ));
    assert!(matches!(
        create_empty_image(2, 0, None),
        Err(PixelforgeError::InvalidDimension(_))
    ));
}

#[test]
fn resize_yields_exact_dimensions() {
    let mut canvas = create_empty_image(4, 4, None).unwrap();
    resize_image(&mut canvas, 7, 3).unwrap();
    assert_eq!(canvas.dimensions(), (7, 3));
}

#[test]
fn resize_rejects_zero_target_and_leaves_canvas_untouched() {
    let mut canvas = create_empty_image(4, 4, None).unwrap();
    assert!(resize_image(&mut canvas, 0, 3).is_err());
    assert_eq!(canvas.dimensions(), (4, 4));
}

#[test]
fn ratio_resize_multiplies_both_dimensions() {
    let mut canvas = create_empty_image(3, 5, None).unwrap();
    resize_image_by_ratio(&mut canvas, 2).unwrap();
    assert_eq!(canvas.dimensions(), (6, 10));
}

#[test]
fn ratio_resize_rejects_zero() {
    let mut canvas = create_empty_image(3, 5, None).unwrap();
    assert!(matches!(
        resize_image_by_ratio(&mut canvas, 0),
        Err(PixelforgeError::InvalidDimension(_))
    ));
    assert_eq!(canvas.dimensions(), (3, 5));
}

#[test]
fn background_is_resized_to_main_and_composited() {
    let red = Rgba([255, 0, 0, 255]);
    let mut background = create_empty_image(2, 2, Some(red)).unwrap();
    let mut main = create_empty_image(4, 4, None).unwrap();

    add_background_image(&mut background, &mut main, None, true).unwrap();

    // the resize side effect on the background is part of the contract
    assert_eq!(background.dimensions(), (4, 4));
    assert!(main.pixels().all(|p| *p == red));
}

#[test]
fn background_offset_without_resize_leaves_rest_untouched() {
    let red = Rgba([255, 0, 0, 255]);
    let mut background = create_empty_image(1, 1, Some(red)).unwrap();
    let mut main = create_empty_image(2, 2, None).unwrap();

    add_background_image(&mut background, &mut main, Some(Point::new(1, 1)), false).unwrap();

    assert_eq!(background.dimensions(), (1, 1));
    assert_eq!(*main.get_pixel(1, 1), red);
    assert_eq!(*main.get_pixel(0, 0), WHITE);
    assert_eq!(*main.get_pixel(1, 0), WHITE);
    assert_eq!(*main.get_pixel(0, 1), WHITE);
}

#[test]
fn rotate_zero_is_identity() {
    let mut canvas = create_empty_image(3, 2, Some(Rgba([1, 2, 3, 4]))).unwrap();
    let before = canvas.clone();
    rotate_image(&mut canvas, 0.0);
    assert_eq!(canvas, before);
}

#[test]
fn rotate_quarter_turn_swaps_dimensions() {
    let mut canvas = create_empty_image(4, 2, None).unwrap();
    rotate_image(&mut canvas, 90.0);
    assert_eq!(canvas.dimensions(), (2, 4));
}

#[test]
fn rotate_quarter_turn_moves_pixels_exactly() {
    let a = Rgba([255, 0, 0, 255]);
    let b = Rgba([0, 255, 0, 255]);
    let c = Rgba([0, 0, 255, 255]);
    let d = Rgba([255, 255, 0, 255]);
    let mut canvas = create_empty_image(2, 2, None).unwrap();
    canvas.put_pixel(0, 0, a);
    canvas.put_pixel(1, 0, b);
    canvas.put_pixel(0, 1, c);
    canvas.put_pixel(1, 1, d);

    rotate_image(&mut canvas, 90.0);

    assert_eq!(canvas.dimensions(), (2, 2));
    assert_eq!(*canvas.get_pixel(0, 0), c);
    assert_eq!(*canvas.get_pixel(1, 0), a);
    assert_eq!(*canvas.get_pixel(0, 1), d);
    assert_eq!(*canvas.get_pixel(1, 1), b);
}

#[test]
fn rotate_diagonal_grows_to_bounding_box_with_transparent_corners() {
    let red = Rgba([255, 0, 0, 255]);
    let mut canvas = create_empty_image(10, 10, Some(red)).unwrap();

    rotate_image(&mut canvas, 45.0);

    assert_eq!(canvas.dimensions(), (14, 14));
    assert_eq!(*canvas.get_pixel(0, 0), TRANSPARENT);
    assert_eq!(*canvas.get_pixel(13, 13), TRANSPARENT);
    assert_eq!(*canvas.get_pixel(7, 7), red);
}
