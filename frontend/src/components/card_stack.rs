use rand::Rng;
use web_sys::Element;
use yew::prelude::*;

use crate::config;

/// Per-card state. `level` works like a CSS z-index: the higher one sits in
/// front. Levels stay a contiguous block but may drift below zero as cards
/// are sent to the back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardState {
    pub level: i32,
    pub tilt_deg: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StackState {
    cards: Vec<CardState>,
}

fn random_tilt(rng: &mut impl Rng) -> f64 {
    rng.gen_range(-config::STACK_MAX_TILT_DEG..config::STACK_MAX_TILT_DEG)
}

impl StackState {
    /// First card on top: card `i` of `n` starts at level `n - 1 - i`.
    pub fn new(len: usize, random_rotation: bool, rng: &mut impl Rng) -> Self {
        let cards = (0..len)
            .map(|index| CardState {
                level: (len - 1 - index) as i32,
                tilt_deg: if random_rotation { random_tilt(&mut *rng) } else { 0.0 },
            })
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, index: usize) -> Option<CardState> {
        self.cards.get(index).copied()
    }

    fn min_level(&self) -> i32 {
        self.cards.iter().map(|c| c.level).min().unwrap_or(0)
    }

    /// Level shifted so the back card sits at 0. Usable directly as a z-index.
    pub fn z_index(&self, index: usize) -> Option<i32> {
        let min = self.min_level();
        self.card(index).map(|c| c.level - min)
    }

    /// Position counted from the front, 0 is the top card.
    pub fn depth(&self, index: usize) -> Option<usize> {
        let level = self.card(index)?.level;
        Some(self.cards.iter().filter(|c| c.level > level).count())
    }

    /// Moves the card behind all others. Cards above it drop one level to
    /// close the gap it leaves.
    pub fn send_to_back(&mut self, index: usize, random_rotation: bool, rng: &mut impl Rng) {
        let Some(clicked) = self.card(index) else {
            return;
        };
        let min = self.min_level();

        for (i, card) in self.cards.iter_mut().enumerate() {
            if i != index && card.level > clicked.level {
                card.level -= 1;
            }
        }

        self.cards[index] = CardState {
            level: min - 1,
            tilt_deg: if random_rotation { random_tilt(&mut *rng) } else { 0.0 },
        };
    }
}

/// Pointer offset from the container centre, already scaled to pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

impl PointerOffset {
    pub fn from_container(
        pointer: (f64, f64),
        origin: (f64, f64),
        size: (f64, f64),
        sensitivity: f64,
    ) -> Self {
        let sensitivity = if sensitivity > 0.0 { sensitivity } else { config::STACK_SENSITIVITY };
        let dx = (pointer.0 - origin.0 - size.0 / 2.0) / sensitivity;
        let dy = (pointer.1 - origin.1 - size.1 / 2.0) / sensitivity;
        Self {
            x: dx * config::STACK_POINTER_SCALE,
            y: dy * config::STACK_POINTER_SCALE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotate_deg: f64,
    pub transition: &'static str,
}

impl CardTransform {
    pub fn css(&self) -> String {
        format!(
            "transform: translate({}px, {}px) rotate({}deg); transition: {};",
            self.translate_x, self.translate_y, self.rotate_deg, self.transition
        )
    }
}

/// Cards further down the original list move a little more, which gives the
/// stack its sense of depth.
pub fn card_transform(offset: PointerOffset, hovering: bool, index: usize, tilt_deg: f64) -> CardTransform {
    if !hovering {
        return CardTransform {
            translate_x: 0.0,
            translate_y: 0.0,
            rotate_deg: tilt_deg,
            transition: config::STACK_RESET_TRANSITION,
        };
    }

    let depth = 1.0 + index as f64 * config::STACK_DEPTH_STEP;
    CardTransform {
        translate_x: offset.x * depth,
        translate_y: offset.y * depth,
        rotate_deg: tilt_deg,
        transition: config::STACK_HOVER_TRANSITION,
    }
}

#[derive(Properties, PartialEq)]
pub struct CardStackProps {
    pub children: Children,
    #[prop_or(true)]
    pub random_rotation: bool,
    #[prop_or(config::STACK_SENSITIVITY)]
    pub sensitivity: f64,
    #[prop_or(true)]
    pub send_to_back_on_click: bool,
}

#[function_component(CardStack)]
pub fn card_stack(props: &CardStackProps) -> Html {
    let container_ref = use_node_ref();
    let card_count = props.children.len();
    let random_rotation = props.random_rotation;

    let stack = use_state(|| StackState::new(card_count, random_rotation, &mut rand::thread_rng()));
    let pointer = use_state(PointerOffset::default);
    let hovering = use_state(|| false);

    {
        let stack = stack.clone();
        use_effect_with_deps(move |(count, random_rotation)| {
            if stack.len() != *count {
                stack.set(StackState::new(*count, *random_rotation, &mut rand::thread_rng()));
            }
            || ()
        }, (card_count, random_rotation));
    }

    let on_mouse_move = {
        let container_ref = container_ref.clone();
        let pointer = pointer.clone();
        let sensitivity = props.sensitivity;
        Callback::from(move |e: MouseEvent| {
            let Some(container) = container_ref.cast::<Element>() else {
                return;
            };
            let rect = container.get_bounding_client_rect();
            pointer.set(PointerOffset::from_container(
                (e.client_x() as f64, e.client_y() as f64),
                (rect.left(), rect.top()),
                (rect.width(), rect.height()),
                sensitivity,
            ));
        })
    };

    let on_mouse_enter = {
        let hovering = hovering.clone();
        Callback::from(move |_: MouseEvent| hovering.set(true))
    };

    let on_mouse_leave = {
        let hovering = hovering.clone();
        let pointer = pointer.clone();
        Callback::from(move |_: MouseEvent| {
            hovering.set(false);
            pointer.set(PointerOffset::default());
        })
    };

    let on_card_click = {
        let stack = stack.clone();
        let send_to_back = props.send_to_back_on_click;
        move |index: usize| {
            let stack = stack.clone();
            Callback::from(move |_: MouseEvent| {
                if !send_to_back {
                    return;
                }
                let mut next = (*stack).clone();
                next.send_to_back(index, random_rotation, &mut rand::thread_rng());
                log::debug!("Card {} sent to back of stack", index);
                stack.set(next);
            })
        }
    };

    html! {
        <div
            ref={container_ref}
            class="stack-container"
            onmousemove={on_mouse_move}
            onmouseenter={on_mouse_enter}
            onmouseleave={on_mouse_leave}
        >
            {
                for props.children.iter().enumerate().map(|(index, child)| {
                    let state = stack.card(index).unwrap_or(CardState { level: 0, tilt_deg: 0.0 });
                    let z_index = stack.z_index(index).unwrap_or(0);
                    let transform = card_transform(*pointer, *hovering, index, state.tilt_deg);
                    html! {
                        <div
                            key={index}
                            class="stack-card"
                            style={format!("z-index: {}; {}", z_index, transform.css())}
                            onclick={on_card_click(index)}
                        >
                            { child }
                        </div>
                    }
                })
            }
            <style>
                {r#"
                .stack-container {
                    position: relative;
                    width: 320px;
                    height: 240px;
                    margin: 0 auto;
                    perspective: 600px;
                }

                .stack-card {
                    position: absolute;
                    inset: 0;
                    border-radius: 18px;
                    overflow: hidden;
                    cursor: pointer;
                    background: #fdfaf3;
                    box-shadow: 0 12px 32px rgba(0, 0, 0, 0.25);
                    will-change: transform;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn levels(stack: &StackState) -> Vec<i32> {
        (0..stack.len()).map(|i| stack.card(i).unwrap().level).collect()
    }

    fn assert_contiguous(stack: &StackState) {
        let mut z: Vec<i32> = (0..stack.len()).map(|i| stack.z_index(i).unwrap()).collect();
        z.sort_unstable();
        assert_eq!(z, (0..stack.len() as i32).collect::<Vec<_>>());

        let mut depths: Vec<usize> = (0..stack.len()).map(|i| stack.depth(i).unwrap()).collect();
        depths.sort_unstable();
        assert_eq!(depths, (0..stack.len()).collect::<Vec<_>>());
    }

    #[test]
    fn initial_levels_put_first_card_on_top() {
        for n in 1..=8 {
            let stack = StackState::new(n, false, &mut rng());
            let expected: Vec<i32> = (0..n).map(|i| (n - 1 - i) as i32).collect();
            assert_eq!(levels(&stack), expected);
            assert_eq!(stack.depth(0), Some(0));
        }
    }

    #[test]
    fn tilt_stays_within_bound() {
        let mut rng = rng();
        let mut stack = StackState::new(12, true, &mut rng);
        for i in 0..40 {
            stack.send_to_back(i % 12, true, &mut rng);
        }
        for i in 0..stack.len() {
            assert!(stack.card(i).unwrap().tilt_deg.abs() <= config::STACK_MAX_TILT_DEG);
        }
    }

    #[test]
    fn no_rotation_means_flat_cards() {
        let mut stack = StackState::new(3, false, &mut rng());
        stack.send_to_back(1, false, &mut rng());
        assert!((0..3).all(|i| stack.card(i).unwrap().tilt_deg == 0.0));
    }

    #[test]
    fn clicking_back_card_only_moves_that_card() {
        // [X, Y, Z] starts as X:2, Y:1, Z:0
        let mut stack = StackState::new(3, false, &mut rng());
        stack.send_to_back(0, false, &mut rng());
        assert_eq!(levels(&stack), vec![-1, 1, 0]);
        assert_contiguous(&stack);
    }

    #[test]
    fn clicking_lower_card_shifts_the_ones_above() {
        let mut stack = StackState::new(3, false, &mut rng());
        stack.send_to_back(2, false, &mut rng());
        assert_eq!(levels(&stack), vec![1, 0, -1]);
        assert_eq!(stack.depth(2), Some(2));
        assert_contiguous(&stack);
    }

    #[test]
    fn repeatedly_clicking_the_front_card_cycles_the_stack() {
        let mut rng = rng();
        let mut stack = StackState::new(4, false, &mut rng);
        for round in 0..12 {
            let front = (0..4).find(|&i| stack.depth(i) == Some(0)).unwrap();
            let before: Vec<usize> = (0..4).map(|i| stack.depth(i).unwrap()).collect();

            stack.send_to_back(front, false, &mut rng);

            assert_eq!(stack.depth(front), Some(3), "round {}", round);
            assert_eq!(stack.z_index(front), Some(0));
            for i in (0..4).filter(|&i| i != front) {
                assert_eq!(stack.depth(i).unwrap(), before[i] - 1);
            }
            assert_contiguous(&stack);
        }
    }

    #[test]
    fn arbitrary_clicks_keep_levels_contiguous() {
        let mut rng = rng();
        let mut stack = StackState::new(5, true, &mut rng);
        for step in 0..200 {
            let index = rng.gen_range(0..5);
            stack.send_to_back(index, true, &mut rng);
            assert_contiguous(&stack);
            assert_eq!(stack.depth(index), Some(4), "step {}", step);
        }
    }

    #[test]
    fn single_card_and_out_of_range_clicks_are_harmless() {
        let mut stack = StackState::new(1, false, &mut rng());
        stack.send_to_back(0, false, &mut rng());
        assert_eq!(stack.depth(0), Some(0));
        assert_eq!(stack.z_index(0), Some(0));

        let before = stack.clone();
        stack.send_to_back(9, false, &mut rng());
        assert_eq!(stack, before);

        let mut empty = StackState::new(0, true, &mut rng());
        empty.send_to_back(0, true, &mut rng());
        assert!(empty.is_empty());
    }

    #[test]
    fn pointer_offset_is_relative_to_centre() {
        let centred = PointerOffset::from_container((150.0, 100.0), (50.0, 50.0), (200.0, 100.0), 180.0);
        assert_eq!(centred, PointerOffset::default());

        let right = PointerOffset::from_container((330.0, 100.0), (50.0, 50.0), (200.0, 100.0), 180.0);
        assert!((right.x - 20.0).abs() < 1e-9);
        assert_eq!(right.y, 0.0);
    }

    #[test]
    fn deeper_cards_move_further() {
        let offset = PointerOffset { x: 10.0, y: -4.0 };
        let front = card_transform(offset, true, 0, 2.0);
        let third = card_transform(offset, true, 2, 2.0);

        assert_eq!(front.translate_x, 10.0);
        assert!((third.translate_x - 12.0).abs() < 1e-9);
        assert!((third.translate_y + 4.8).abs() < 1e-9);
        assert_eq!(third.rotate_deg, 2.0);
        assert_eq!(front.transition, config::STACK_HOVER_TRANSITION);
    }

    #[test]
    fn leaving_resets_translation_but_keeps_tilt() {
        let t = card_transform(PointerOffset { x: 30.0, y: 30.0 }, false, 3, -1.5);
        assert_eq!((t.translate_x, t.translate_y), (0.0, 0.0));
        assert_eq!(t.rotate_deg, -1.5);
        assert_eq!(t.transition, config::STACK_RESET_TRANSITION);
        assert!(t.css().starts_with("transform: translate(0px, 0px) rotate(-1.5deg)"));
    }
}
