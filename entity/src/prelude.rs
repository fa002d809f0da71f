pub use super::achievement::Entity as Achievement;
pub use super::badge::Entity as Badge;
pub use super::clan::Entity as Clan;
pub use super::clan_member::Entity as ClanMember;
pub use super::cursor_theme::Entity as CursorTheme;
pub use super::custom_title::Entity as CustomTitle;
pub use super::gradient_theme::Entity as GradientTheme;
pub use super::player::Entity as Player;
pub use super::player_achievement::Entity as PlayerAchievement;
pub use super::player_badge::Entity as PlayerBadge;
pub use super::player_gradient_setting::Entity as PlayerGradientSetting;
pub use super::player_quest::Entity as PlayerQuest;
pub use super::player_title::Entity as PlayerTitle;
pub use super::quest::Entity as Quest;
pub use super::shop_item::Entity as ShopItem;
pub use super::shop_purchase::Entity as ShopPurchase;
pub use super::site_theme::Entity as SiteTheme;
pub use super::tournament::Entity as Tournament;
pub use super::tournament_participant::Entity as TournamentParticipant;
