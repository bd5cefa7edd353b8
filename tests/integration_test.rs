use particle_tween::animation::{CurveFamily, EasingFunction, Tweener};
use particle_tween::config::SimulationConfig;
use particle_tween::core::{FrameClock, RandomSource, SimulationRng};
use particle_tween::particles::{ChannelRange, Particle, ParticleChannel, ParticleData, ParticleState};
use std::sync::Arc;

fn fountain() -> ParticleData {
    ParticleData::new()
        .with_life_span(1.0, 0.0, 0.0)
        .with_velocity([0.0, 60.0, -10.0, 10.0], [-120.0, 0.0, -5.0, 5.0])
        .with_colour([
            ChannelRange::new(255.0, 255.0, 0.0, 0.0),
            ChannelRange::new(200.0, 50.0, -20.0, 20.0),
            ChannelRange::new(0.0, 0.0, 0.0, 0.0),
            ChannelRange::new(255.0, 0.0, 0.0, 0.0),
        ])
}

#[test]
fn test_full_particle_lifecycle() {
    let mut rng = SimulationRng::seeded(2024);
    let mut clock = FrameClock::fixed(0.1);

    // 创建并发射粒子
    let mut particle = Particle::new(fountain(), &mut rng);
    particle.emit(10.0, 20.0, &mut rng);
    assert_eq!(particle.state(), ParticleState::Alive);

    let mut frames = 0;
    while particle.is_alive() {
        particle.update(clock.advance_fixed());
        frames += 1;
        assert!(frames <= 11, "particle never expired");
    }

    // 生命周期结束时补间全部到达目标
    assert_eq!(particle.state(), ParticleState::Expired);
    for channel in ParticleChannel::ALL {
        let tweener = particle.tweener(channel);
        assert!((tweener.value() - tweener.target()).abs() < 1e-3);
    }
    assert!(particle.colour()[3].abs() < 1e-3);
    assert!(particle.position_x() > 10.0);
    assert!(particle.position_y() < 20.0);

    // 过期后冻结
    let frozen = particle.position();
    particle.update(clock.advance_fixed());
    assert_eq!(particle.position(), frozen);
}

#[test]
fn test_seeded_runs_are_deterministic() {
    let run = |seed: u64| {
        let mut rng = SimulationRng::seeded(seed);
        let mut particle = Particle::new(fountain(), &mut rng);
        particle.emit(0.0, 0.0, &mut rng);
        for _ in 0..5 {
            particle.update(0.1);
        }
        (particle.position(), particle.colour())
    };

    assert_eq!(run(7), run(7));
    assert_ne!(run(7), run(8));
}

#[test]
fn test_particle_reuse_after_expiry() {
    let data = Arc::new(fountain());
    let mut rng = SimulationRng::seeded(5);
    let mut particle = Particle::new(Arc::clone(&data), &mut rng);

    for round in 0..3 {
        particle.emit(round as f32, 0.0, &mut rng);
        assert_eq!(particle.life_time(), 0.0);
        assert_eq!(particle.position_x(), round as f32);
        while particle.is_alive() {
            particle.update(0.25);
        }
    }
    assert_eq!(particle.life_span(), 1.0);
}

#[test]
fn test_config_drives_simulation() {
    let config = SimulationConfig::from_toml_str(
        r#"
        [timing]
        fixed_delta = 0.125
        max_delta = 0.25

        [random]
        seed = 77

        [particle.life_span]
        value = 0.5

        [particle.velocity_y]
        value = 10.0
        target = 10.0
        "#,
    )
    .unwrap();
    config.validate().unwrap();

    let mut rng = config.random.build_rng();
    let mut clock = FrameClock::from_config(&config.timing);
    let mut particle = Particle::new(config.particle.clone(), &mut rng);
    particle.emit(0.0, 0.0, &mut rng);

    for _ in 0..10 {
        particle.update(clock.advance_fixed());
    }
    assert!(!particle.is_alive());
    assert!((particle.position_y() - 5.0).abs() < 1e-3);
    assert_eq!(clock.frame_count(), 10);
}

#[test]
fn test_config_file_round_trip() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let mut config = SimulationConfig::default();
    config.random.seed = Some(9);
    config.particle = fountain();

    let toml_path = dir.path().join("particle_tween.toml");
    config.save_toml(&toml_path)?;
    assert_eq!(SimulationConfig::from_toml_file(&toml_path)?, config);

    let json_path = dir.path().join("particle_tween.json");
    config.save_json(&json_path)?;
    assert_eq!(SimulationConfig::from_json_file(&json_path)?, config);
    Ok(())
}

#[test]
fn test_missing_config_file_is_an_error() {
    let result = SimulationConfig::from_toml_file("/nonexistent/particle_tween.toml");
    assert!(result.is_err());
}

#[test]
fn test_tweener_scenarios() {
    let mut linear = Tweener::new(0.0, 10.0, 1.0, EasingFunction::LINEAR);
    linear.update(0.5);
    assert!((linear.value() - 5.0).abs() < 1e-6);
    linear.update(0.5);
    assert!((linear.value() - 10.0).abs() < 1e-6);

    linear.reset();
    assert_eq!(linear.value(), 0.0);

    let mut out = Tweener::new(0.0, 10.0, 1.0, EasingFunction::ease_out(CurveFamily::Quadratic));
    let mut reference = Tweener::new(0.0, 10.0, 1.0, EasingFunction::LINEAR);
    for _ in 0..3 {
        out.update(0.25);
        reference.update(0.25);
        assert!(out.value() > reference.value());
    }
}

#[test]
fn test_dyn_random_source() {
    let mut rng = SimulationRng::seeded(31);
    let source: &mut dyn RandomSource = &mut rng;
    let particle = Particle::new(fountain(), source);
    assert!(particle.is_alive());
}
