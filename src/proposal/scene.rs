use super::state::ProposalModel;

/// Where the "No" button should be drawn and whether it is mid-wobble.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoButtonPose {
    pub x: f64,
    pub y: f64,
    pub wobble: bool,
    pub round: u64,
}

impl NoButtonPose {
    /// Alternates between two identical animations so that every new
    /// shake restarts the wobble, even while the previous one is running.
    pub fn wobble_class(&self) -> Option<&'static str> {
        match (self.wobble, self.round % 2) {
            (false, _) => None,
            (true, 0) => Some("wobble-even"),
            (true, _) => Some("wobble-odd"),
        }
    }

    pub fn transform(&self) -> String {
        format!("translate({:.1}px, {:.1}px)", self.x, self.y)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ProposalScene {
    Question {
        no_button: NoButtonPose,
        show_taunt: bool,
    },
    Celebration,
}

pub fn proposal_scene(model: &ProposalModel) -> ProposalScene {
    if model.is_accepted() {
        return ProposalScene::Celebration;
    }
    ProposalScene::Question {
        no_button: NoButtonPose {
            x: model.position.x,
            y: model.position.y,
            wobble: model.shaking,
            round: model.shake_round(),
        },
        show_taunt: model.shaking,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EvadeGeometry;
    use crate::proposal::state::tests::Sequence;
    use crate::proposal::state::ContainerBounds;

    #[test]
    fn pending_shows_question_at_rest() {
        let scene = proposal_scene(&ProposalModel::new());
        assert_eq!(
            scene,
            ProposalScene::Question {
                no_button: NoButtonPose { x: 0.0, y: 0.0, wobble: false, round: 0 },
                show_taunt: false,
            }
        );
    }

    #[test]
    fn evading_moves_button_and_taunts() {
        let (model, _) = ProposalModel::new().evade(
            ContainerBounds::new(400.0, 300.0),
            &EvadeGeometry::default(),
            &mut Sequence::new(&[0.0, 1.0]),
        );
        match proposal_scene(&model) {
            ProposalScene::Question { no_button, show_taunt } => {
                assert_eq!(no_button.transform(), "translate(-125.0px, 100.0px)");
                assert!(no_button.wobble);
                assert!(show_taunt);
            }
            other => panic!("expected question, got {:?}", other),
        }
    }

    #[test]
    fn each_evasion_switches_wobble_animation() {
        let bounds = ContainerBounds::new(400.0, 300.0);
        let mut units = Sequence::new(&[0.3, 0.6]);
        let mut model = ProposalModel::new();
        let mut classes = Vec::new();
        for _ in 0..3 {
            let (next, _) = model.evade(bounds, &EvadeGeometry::default(), &mut units);
            model = next;
            match proposal_scene(&model) {
                ProposalScene::Question { no_button, .. } => classes.push(no_button.wobble_class()),
                other => panic!("expected question, got {:?}", other),
            }
        }
        assert_eq!(classes, vec![Some("wobble-odd"), Some("wobble-even"), Some("wobble-odd")]);
    }

    #[test]
    fn settled_button_has_no_wobble_class() {
        let pose = NoButtonPose { x: 0.0, y: 0.0, wobble: false, round: 3 };
        assert_eq!(pose.wobble_class(), None);
    }

    #[test]
    fn accepted_scene_ignores_later_evasions() {
        let accepted = ProposalModel::new().accept();
        let (after, _) = accepted.evade(
            ContainerBounds::new(400.0, 300.0),
            &EvadeGeometry::default(),
            &mut Sequence::new(&[0.8]),
        );
        assert_eq!(proposal_scene(&accepted), ProposalScene::Celebration);
        assert_eq!(proposal_scene(&after), ProposalScene::Celebration);
    }
}
