mod clan;
mod player;
mod quest;
