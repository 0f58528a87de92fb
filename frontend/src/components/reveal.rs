use yew::prelude::*;

/// Pixel displacement an element starts from before it is revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const NONE: Offset = Offset { x: 0.0, y: 0.0 };

    pub const fn x(px: f64) -> Self {
        Offset { x: px, y: 0.0 }
    }

    pub const fn y(px: f64) -> Self {
        Offset { x: 0.0, y: px }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Identity,
    Translate(Offset),
}

impl Transform {
    fn css(&self) -> String {
        match self {
            Transform::Identity => "translate(0px, 0px)".to_string(),
            Transform::Translate(o) => format!("translate({}px, {}px)", o.x, o.y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f64,
    pub transform: Transform,
    pub transition_delay_ms: u32,
}

impl RevealStyle {
    /// Inline declarations for a `style` attribute.
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: {}; transition-delay: {}ms;",
            self.opacity,
            self.transform.css(),
            self.transition_delay_ms
        )
    }
}

/// Style of a reveal step. The delay is only metadata for the CSS transition;
/// negative delays clamp to zero.
pub fn compute_style(has_entered: bool, delay_ms: i64, from_offset: Offset) -> RevealStyle {
    let transition_delay_ms = delay_ms.clamp(0, u32::MAX as i64) as u32;
    if has_entered {
        RevealStyle {
            opacity: 1.0,
            transform: Transform::Identity,
            transition_delay_ms,
        }
    } else {
        RevealStyle {
            opacity: 0.0,
            transform: Transform::Translate(from_offset),
            transition_delay_ms,
        }
    }
}

/// One animated child of a tracked element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStep {
    pub delay_ms: i64,
    pub from: Offset,
}

impl RevealStep {
    pub const fn new(delay_ms: i64, from: Offset) -> Self {
        RevealStep { delay_ms, from }
    }

    /// Staggered list item: `base + index * step` milliseconds.
    pub const fn staggered(base_ms: i64, step_ms: i64, index: usize, from: Offset) -> Self {
        RevealStep {
            delay_ms: base_ms + step_ms * index as i64,
            from,
        }
    }

    pub fn style(&self, active: bool) -> String {
        compute_style(active, self.delay_ms, self.from).to_css()
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub active: bool,
    pub step: RevealStep,
    #[prop_or_default]
    pub class: Option<&'static str>,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps children in a div that fades and slides in once `active` flips.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    html! {
        <div class={classes!("reveal", props.class)} style={props.step.style(props.active)}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_style_keeps_offset_and_delay() {
        let style = compute_style(false, 300, Offset::y(30.0));
        assert_eq!(style.opacity, 0.0);
        assert_eq!(style.transform, Transform::Translate(Offset::y(30.0)));
        assert_eq!(style.transition_delay_ms, 300);
    }

    #[test]
    fn entered_style_is_identity() {
        for delay in [0, 100, 1750] {
            let style = compute_style(true, delay, Offset::x(-50.0));
            assert_eq!(style.opacity, 1.0);
            assert_eq!(style.transform, Transform::Identity);
            assert_eq!(style.transition_delay_ms, delay as u32);
        }
    }

    #[test]
    fn negative_delay_clamps_to_zero() {
        assert_eq!(compute_style(false, -250, Offset::NONE).transition_delay_ms, 0);
        assert_eq!(compute_style(true, -1, Offset::NONE).transition_delay_ms, 0);
    }

    #[test]
    fn css_output() {
        assert_eq!(
            compute_style(false, 100, Offset::x(-30.0)).to_css(),
            "opacity: 0; transform: translate(-30px, 0px); transition-delay: 100ms;"
        );
        assert_eq!(
            RevealStep::new(700, Offset::y(20.0)).style(true),
            "opacity: 1; transform: translate(0px, 0px); transition-delay: 700ms;"
        );
    }

    #[test]
    fn staggered_delays() {
        let delays: Vec<i64> = (0..4)
            .map(|i| RevealStep::staggered(1300, 100, i, Offset::x(-20.0)).delay_ms)
            .collect();
        assert_eq!(delays, vec![1300, 1400, 1500, 1600]);
    }
}
