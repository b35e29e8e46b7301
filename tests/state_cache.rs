use anyhow::Result;

use grafos::{CommandBuffer, GraphicsCmdBuffer};

use framework::Call;

mod framework;

#[test]
pub fn identical_viewport_is_issued_once() -> Result<()> {
    let device = framework::make_device();
    let mut cmd = CommandBuffer::new(device.clone());

    cmd.set_viewport(framework::viewport(800.0, 600.0));
    cmd.set_viewport(framework::viewport(800.0, 600.0));
    assert_eq!(device.translator().viewports(), 1);

    cmd.set_viewport(framework::viewport(800.0, 300.0));
    assert_eq!(device.translator().viewports(), 2, "A different viewport should reach the translator");

    let mut depth = framework::viewport(800.0, 300.0);
    depth.max_depth = 0.5;
    cmd.set_viewport(depth);
    assert_eq!(device.translator().viewports(), 3, "Depth range is part of the viewport");

    let cached = device.state_cache().viewport().expect("Viewport should be cached");
    assert_eq!(cached.max_depth, 0.5);

    Ok(())
}

#[test]
pub fn identical_scissor_is_issued_once() -> Result<()> {
    let device = framework::make_device();
    let mut cmd = CommandBuffer::new(device.clone());

    cmd.set_scissor(framework::rect(0, 0, 100, 100));
    cmd.set_scissor(framework::rect(0, 0, 100, 100));
    assert_eq!(device.translator().scissors(), 1);

    cmd.set_scissor(framework::rect(10, 0, 100, 100));
    cmd.set_scissor(framework::rect(10, 0, 100, 50));
    assert_eq!(device.translator().scissors(), 3);

    // Scissor and viewport are cached independently.
    assert_eq!(device.translator().viewports(), 0);
    assert!(device.state_cache().viewport().is_none());

    Ok(())
}

#[test]
pub fn cache_is_shared_between_command_buffers() -> Result<()> {
    let device = framework::make_device();
    let mut first = CommandBuffer::new(device.clone());
    let mut second = CommandBuffer::new(device.clone());

    first.set_viewport(framework::viewport(640.0, 480.0));
    second.set_viewport(framework::viewport(640.0, 480.0));
    first.set_scissor(framework::rect(0, 0, 640, 480));
    second.set_scissor(framework::rect(0, 0, 640, 480));

    assert_eq!(device.translator().viewports(), 1);
    assert_eq!(device.translator().scissors(), 1);

    // A separate device has a cache of its own.
    let other = framework::make_device();
    let mut third = CommandBuffer::new(other.clone());
    third.set_viewport(framework::viewport(640.0, 480.0));
    assert_eq!(other.translator().viewports(), 1);
    assert!(!device.ptr_eq(&other));

    Ok(())
}

#[test]
pub fn elision_can_be_disabled() -> Result<()> {
    let device = framework::make_device_with_settings(|settings| settings.elide_redundant_state(false));
    let mut cmd = CommandBuffer::new(device.clone());

    cmd.set_viewport(framework::viewport(800.0, 600.0));
    cmd.set_viewport(framework::viewport(800.0, 600.0));
    cmd.set_scissor(framework::rect(0, 0, 800, 600));
    cmd.set_scissor(framework::rect(0, 0, 800, 600));

    assert_eq!(device.translator().viewports(), 2);
    assert_eq!(device.translator().scissors(), 2);
    assert!(device.state_cache().scissor().is_some(), "Cache should still be kept up to date");

    Ok(())
}

#[test]
pub fn invalidated_cache_reissues_state() -> Result<()> {
    let device = framework::make_device();
    let mut cmd = CommandBuffer::new(device.clone());

    cmd.set_viewport(framework::viewport(800.0, 600.0));
    cmd.set_scissor(framework::rect(0, 0, 800, 600));
    device.invalidate_state_cache();
    assert!(device.state_cache().viewport().is_none());
    assert!(device.state_cache().scissor().is_none());

    cmd.set_viewport(framework::viewport(800.0, 600.0));
    cmd.set_scissor(framework::rect(0, 0, 800, 600));
    assert_eq!(device.translator().viewports(), 2);
    assert_eq!(device.translator().scissors(), 2);

    Ok(())
}

#[test]
pub fn viewport_and_scissor_are_legal_in_any_state() -> Result<()> {
    let device = framework::make_device();
    let mut cmd = CommandBuffer::new(device.clone());

    cmd.set_viewport(framework::viewport(100.0, 100.0));
    framework::begin_pass(&mut cmd);
    cmd.set_viewport(framework::viewport(200.0, 200.0));
    cmd.end_render_pass()?;
    cmd.set_viewport(framework::viewport(300.0, 300.0));

    assert_eq!(device.translator().viewports(), 3);
    // Viewport changes never touch the deferred bind state.
    assert!(!cmd.is_state_dirty());

    Ok(())
}

#[test]
pub fn full_viewport_scissor_covers_render_area() -> Result<()> {
    let device = framework::make_device();
    let mut cmd = CommandBuffer::new(device.clone());
    let pass = framework::render_pass();
    let fb = framework::framebuffer();

    cmd.begin_render_pass(&pass, &fb, framework::rect(16, 32, 256, 128), &[], 1.0, 0);
    cmd.full_viewport_scissor();

    let translator = device.translator();
    let viewport = translator.calls.iter().find_map(|call| match call {
        Call::SetViewport(viewport) => Some(*viewport),
        _ => None,
    });
    let scissor = translator.calls.iter().find_map(|call| match call {
        Call::SetScissor(scissor) => Some(*scissor),
        _ => None,
    });

    let viewport = viewport.expect("Viewport should be set");
    assert_eq!(viewport.x, 16.0);
    assert_eq!(viewport.y, 32.0);
    assert_eq!(viewport.width, 256.0);
    assert_eq!(viewport.height, 128.0);
    assert_eq!(viewport.min_depth, 0.0);
    assert_eq!(viewport.max_depth, 1.0);

    let scissor = scissor.expect("Scissor should be set");
    assert_eq!(scissor.offset.x, 16);
    assert_eq!(scissor.offset.y, 32);
    assert_eq!(scissor.extent.width, 256);
    assert_eq!(scissor.extent.height, 128);

    Ok(())
}

#[test]
pub fn negative_zero_is_a_different_viewport() -> Result<()> {
    let device = framework::make_device();
    let mut cmd = CommandBuffer::new(device.clone());

    let mut viewport = framework::viewport(800.0, 600.0);
    cmd.set_viewport(viewport);
    viewport.x = -0.0;
    cmd.set_viewport(viewport);

    assert_eq!(device.translator().viewports(), 2);
    assert_eq!(
        device.state_cache().viewport().map(|viewport| viewport.x.to_bits()),
        Some((-0.0f32).to_bits())
    );

    Ok(())
}

#[test]
pub fn cache_snapshot_outlives_setters() -> Result<()> {
    let device = framework::make_device();
    let mut cmd = CommandBuffer::new(device.clone());

    let cache = device.state_cache();
    if cache.viewport().is_none() {
        cmd.set_viewport(framework::viewport(800.0, 600.0));
    }
    if cache.scissor().is_none() {
        cmd.set_scissor(framework::rect(0, 0, 800, 600));
    }

    // The snapshot is not updated, the device cache is.
    assert!(cache.viewport().is_none());
    assert!(device.state_cache().viewport().is_some());
    assert!(device.state_cache().scissor().is_some());
    assert_eq!(device.translator().viewports(), 1);
    assert_eq!(device.translator().scissors(), 1);

    Ok(())
}
