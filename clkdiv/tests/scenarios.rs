use clkdiv::{ClockDivider, Config, ConfigError, CooldownExit, Registers, State, WaveMonitor};

/// Runs `enable` through the divider, returning the emitted level and the emitting state
/// of every tick.
fn run(d: &mut ClockDivider, enable: &[bool]) -> (Vec<u8>, String) {
    let mut levels = Vec::new();
    let mut states = String::new();
    for &e in enable {
        states.push(d.state().tag());
        levels.push(d.tick(e).clock_level() as u8);
    }
    (levels, states)
}

fn pattern(high: usize, low: usize) -> Vec<bool> {
    let mut p = vec![true; high];
    p.extend(std::iter::repeat(false).take(low));
    p
}

fn toggle_ticks(levels: &[u8]) -> Vec<usize> {
    (1..levels.len())
        .filter(|&t| levels[t] != levels[t - 1])
        .collect()
}

#[test]
fn divisor_8_enabled_for_20_ticks() {
    let mut d = ClockDivider::with_divisor(8).unwrap();
    let (levels, states) = run(&mut d, &pattern(20, 10));

    assert_eq!(
        levels,
        [
            1, 0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, //
            0, 1, 1, 1, 1, 1, 1, 1, 1, 1,
        ]
    );
    assert_eq!(states, "IRRRRRRRRRRRRRRRRRRRRRRCCIIIII");
    assert_eq!(toggle_ticks(&levels), [1, 5, 9, 13, 17, 21]);
    assert!(d.is_idle());
}

#[test]
fn divisor_2_toggles_every_tick() {
    let mut d = ClockDivider::with_divisor(2).unwrap();
    let (levels, states) = run(&mut d, &pattern(6, 4));

    assert_eq!(levels, [1, 0, 1, 0, 1, 0, 1, 0, 1, 1]);
    assert_eq!(states, "IRRRRRRRCI");
    assert!(d.is_idle());
}

#[test]
fn divisor_7_rounds_half_down() {
    let mut d = ClockDivider::with_divisor(7).unwrap();
    let (levels, _) = run(&mut d, &[true; 16]);

    // three ticks away from idle, four at it
    assert_eq!(toggle_ticks(&levels), [1, 4, 8, 11, 15]);
}

#[test]
fn construction_fails_below_two() {
    for divisor in [0, 1] {
        assert_eq!(
            ClockDivider::with_divisor(divisor).unwrap_err(),
            ConfigError::DivisorTooSmall(divisor)
        );
        let config = Config::new(divisor).with_idle_high(false);
        assert!(ClockDivider::new(config).is_err());
    }
}

#[test]
fn graceful_stop_mid_period() {
    let mut d = ClockDivider::with_divisor(8).unwrap();
    // drop enable while the output is away from idle
    let (levels, states) = run(&mut d, &pattern(3, 14));

    assert_eq!(levels, [1, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]);
    assert_eq!(states, "IRRRRRRCCIIIIIIII");

    let first_cooldown = states.find('C').unwrap();
    let back_to_idle = states[1..].find('I').unwrap() + 1;
    assert!(first_cooldown < back_to_idle);
}

#[test]
fn enable_ignored_during_cooldown() {
    let mut d = ClockDivider::with_divisor(8).unwrap();
    let mut enable = pattern(3, 4);
    enable.extend([true; 8]);
    let (levels, states) = run(&mut d, &enable);

    assert_eq!(states, "IRRRRRRCCIRRRRR");
    assert_eq!(levels, [1, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 1]);
}

#[test]
fn liveness_from_idle() {
    for divisor in 2..=16 {
        let mut d = ClockDivider::with_divisor(divisor).unwrap();
        let (levels, _) = run(&mut d, &vec![true; divisor as usize]);
        assert!(!toggle_ticks(&levels).is_empty(), "divisor {}", divisor);
    }
}

#[test]
fn idle_low_polarity_mirrors_idle_high() {
    let enable = pattern(13, 9);
    let mut high = ClockDivider::with_divisor(6).unwrap();
    let mut low = ClockDivider::new(Config::new(6).with_idle_high(false)).unwrap();

    let (h, hs) = run(&mut high, &enable);
    let (l, ls) = run(&mut low, &enable);
    assert_eq!(hs, ls);
    assert!(h.iter().zip(&l).all(|(a, b)| a != b));
}

#[test]
fn cooldown_exit_rules_agree_when_ticking() {
    let enable: Vec<bool> = (0..64).map(|t| (t * 7 / 3) % 5 < 3).collect();
    let mut a = ClockDivider::with_divisor(6).unwrap();
    let mut b =
        ClockDivider::new(Config::new(6).with_cooldown_exit(CooldownExit::AtLimit)).unwrap();

    assert_eq!(run(&mut a, &enable), run(&mut b, &enable));
}

#[test]
fn cooldown_exit_rules_differ_past_limit() {
    let stuck = Registers {
        state: State::Cooldown as u8,
        level: true,
        prev_level: true,
        counter: 10,
    };

    let mut a = ClockDivider::with_divisor(8).unwrap();
    a.load_registers(stuck);
    a.tick(false);
    assert_eq!(a.state(), State::Idle);

    let mut b =
        ClockDivider::new(Config::new(8).with_cooldown_exit(CooldownExit::AtLimit)).unwrap();
    b.load_registers(stuck);
    // wraps to zero, then runs a whole period before leaving
    let (levels, states) = run(&mut b, &[false; 10]);
    assert_eq!(states, "CCCCCCCCCI");
    assert!(levels.iter().all(|&l| l == 1));
}

#[test]
fn recovered_divider_still_divides() {
    let mut d = ClockDivider::with_divisor(4).unwrap();
    d.load_registers(Registers::from(0b11));
    assert_eq!(d.recoveries(), 1);
    assert!(d.is_idle());

    let mut m = WaveMonitor::new(4);
    for _ in 0..20 {
        m.observe(d.tick(true));
    }
    assert!(m.is_clean());
    assert_eq!(m.shortest_run(), Some(2));
}
