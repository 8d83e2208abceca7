//! Draw and wheel appearance configuration.
//!
//! Both configs parse from a `key=value` option string (see
//! [`raffle_lib::config`]). Unknown keys are ignored. The lenient parsers
//! keep defaults for malformed values, so a stale saved option string never
//! blocks a draw; the `_strict` variants report them instead.

use core::time::Duration;

use bitflags::bitflags;
use raffle_abi::{Color32, ColorScheme, FontStyle, PointerStyle};
use raffle_lib::config::{options, parse_bool, parse_duration_ms, parse_size};
use raffle_lib::{KlogLevel, klog_debug, klog_warn};

use crate::error::{DrawError, DrawResult};

/// Fewest forward turns a spin makes before settling.
pub const MIN_FULL_ROTATIONS: u32 = 3;

const DEFAULT_FULL_ROTATIONS: u32 = 5;
const DEFAULT_SIZE: (u32, u32) = (480, 480);
const DEFAULT_BORDER_WIDTH: u32 = 4;
const DEFAULT_BORDER_COLOR: Color32 = Color32::from_rgb_u32(0xFFFFFF);
const DEFAULT_POINTER_COLOR: Color32 = Color32::from_rgb_u32(0xE53935);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl SpinSpeed {
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("slow") {
            Some(SpinSpeed::Slow)
        } else if value.eq_ignore_ascii_case("normal") {
            Some(SpinSpeed::Normal)
        } else if value.eq_ignore_ascii_case("fast") {
            Some(SpinSpeed::Fast)
        } else {
            None
        }
    }

    /// Wall-clock length of one spin animation.
    pub fn duration(&self) -> Duration {
        match self {
            SpinSpeed::Slow => Duration::from_millis(8000),
            SpinSpeed::Normal => Duration::from_millis(5000),
            SpinSpeed::Fast => Duration::from_millis(3000),
        }
    }
}

bitflags! {
    /// Presentation effects, each toggled on its own.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct EffectFlags: u8 {
        const SPIN_SOUND = 1 << 0;
        const WIN_SOUND = 1 << 1;
        const CONFETTI = 1 << 2;
    }
}

bitflags! {
    /// Which wheel decorations are drawn.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct DisplayFlags: u8 {
        const NUMBERS = 1 << 0;
        const NAMES = 1 << 1;
        const BORDER = 1 << 2;
        const POINTER = 1 << 3;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawConfig {
    pub speed: SpinSpeed,
    /// Overrides the speed-derived duration when set.
    pub duration_override: Option<Duration>,
    pub full_rotations: u32,
    pub effects: EffectFlags,
    /// Forward settled winners to the store's `record_winner`.
    pub persist_winners: bool,
    /// Log level installed when a session takes this config.
    pub log_level: Option<KlogLevel>,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            speed: SpinSpeed::default(),
            duration_override: None,
            full_rotations: DEFAULT_FULL_ROTATIONS,
            effects: EffectFlags::all(),
            persist_winners: false,
            log_level: None,
        }
    }
}

fn set_flag<F: bitflags::Flags + Copy>(flags: &mut F, flag: F, value: &str) -> Applied {
    match parse_bool(value) {
        Some(on) => {
            flags.set(flag, on);
            Applied::Set
        }
        None => Applied::Malformed,
    }
}

fn set_value<T>(slot: &mut T, parsed: Option<T>) -> Applied {
    match parsed {
        Some(value) => {
            *slot = value;
            Applied::Set
        }
        None => Applied::Malformed,
    }
}

/// What a single `key=value` pair did to a config.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Applied {
    Set,
    Malformed,
    Unknown,
}

fn parse_options<C>(
    cfg: &mut C,
    cmdline: &str,
    strict: bool,
    apply: fn(&mut C, &str, &str) -> Applied,
) -> DrawResult {
    for (key, value) in options(cmdline) {
        match apply(cfg, key, value) {
            Applied::Set => {}
            Applied::Malformed if strict => {
                return Err(DrawError::InvalidOption {
                    key: String::from(key),
                    value: String::from(value),
                });
            }
            Applied::Malformed => klog_warn!("config: bad value {:?} for {}", value, key),
            Applied::Unknown => klog_debug!("config: ignoring option {}", key),
        }
    }
    Ok(())
}

impl DrawConfig {
    pub fn spin_duration(&self) -> Duration {
        self.duration_override.unwrap_or_else(|| self.speed.duration())
    }

    fn apply(&mut self, key: &str, value: &str) -> Applied {
        match key {
            "speed" => set_value(&mut self.speed, SpinSpeed::parse(value)),
            "spin.duration" => set_value(
                &mut self.duration_override,
                parse_duration_ms(value).map(Some),
            ),
            "spin.rotations" => set_value(
                &mut self.full_rotations,
                value.parse::<u32>().ok().map(|turns| turns.max(MIN_FULL_ROTATIONS)),
            ),
            "sound.spin" => set_flag(&mut self.effects, EffectFlags::SPIN_SOUND, value),
            "sound.win" => set_flag(&mut self.effects, EffectFlags::WIN_SOUND, value),
            "confetti" => set_flag(&mut self.effects, EffectFlags::CONFETTI, value),
            "winners.persist" => set_value(&mut self.persist_winners, parse_bool(value)),
            "log.level" => set_value(&mut self.log_level, KlogLevel::parse(value).map(Some)),
            _ => Applied::Unknown,
        }
    }

    /// Lenient parse: malformed values keep their defaults.
    pub fn from_cmdline(cmdline: &str) -> Self {
        let mut cfg = Self::default();
        let _ = parse_options(&mut cfg, cmdline, false, Self::apply);
        cfg
    }

    /// Like [`DrawConfig::from_cmdline`] but refuses malformed values.
    pub fn from_cmdline_strict(cmdline: &str) -> DrawResult<Self> {
        let mut cfg = Self::default();
        parse_options(&mut cfg, cmdline, true, Self::apply)?;
        Ok(cfg)
    }
}

/// Everything the renderer needs besides session state. Any change to it
/// means a redraw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisualConfig {
    pub width: u32,
    pub height: u32,
    pub color_scheme: ColorScheme,
    pub font_style: FontStyle,
    pub display: DisplayFlags,
    pub border_width: u32,
    pub border_color: Color32,
    pub pointer_style: PointerStyle,
    pub pointer_color: Color32,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE.0,
            height: DEFAULT_SIZE.1,
            color_scheme: ColorScheme::default(),
            font_style: FontStyle::default(),
            display: DisplayFlags::NUMBERS | DisplayFlags::BORDER | DisplayFlags::POINTER,
            border_width: DEFAULT_BORDER_WIDTH,
            border_color: DEFAULT_BORDER_COLOR,
            pointer_style: PointerStyle::default(),
            pointer_color: DEFAULT_POINTER_COLOR,
        }
    }
}

impl VisualConfig {
    fn apply(&mut self, key: &str, value: &str) -> Applied {
        match key {
            "size" => match parse_size(value) {
                Some((w, h)) => {
                    self.width = w;
                    self.height = h;
                    Applied::Set
                }
                None => Applied::Malformed,
            },
            "palette" => set_value(&mut self.color_scheme, ColorScheme::parse(value)),
            "font" => set_value(&mut self.font_style, FontStyle::parse(value)),
            "labels.numbers" => set_flag(&mut self.display, DisplayFlags::NUMBERS, value),
            "labels.names" => set_flag(&mut self.display, DisplayFlags::NAMES, value),
            "border" => set_flag(&mut self.display, DisplayFlags::BORDER, value),
            "pointer" => set_flag(&mut self.display, DisplayFlags::POINTER, value),
            "border.width" => set_value(&mut self.border_width, value.parse().ok()),
            "border.color" => set_value(&mut self.border_color, Color32::parse_hex(value)),
            "pointer.style" => set_value(&mut self.pointer_style, PointerStyle::parse(value)),
            "pointer.color" => set_value(&mut self.pointer_color, Color32::parse_hex(value)),
            _ => Applied::Unknown,
        }
    }

    pub fn from_cmdline(cmdline: &str) -> Self {
        let mut cfg = Self::default();
        let _ = parse_options(&mut cfg, cmdline, false, Self::apply);
        cfg
    }

    pub fn from_cmdline_strict(cmdline: &str) -> DrawResult<Self> {
        let mut cfg = Self::default();
        parse_options(&mut cfg, cmdline, true, Self::apply)?;
        Ok(cfg)
    }
}
