#[path = "../../jigsaw-game/tests/data_shapes.rs"]
mod data_shapes;

#[path = "../../jigsaw-game/tests/full_campaign.rs"]
mod full_campaign;
