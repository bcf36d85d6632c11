//! Telegram wiring: the /start command, callback-query handling, and the
//! conversion from the transport-neutral keyboards to Telegram markup.

use async_trait::async_trait;
use teloxide::dispatching::{HandlerExt, UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::{
    CallbackQuery, ChatId, InlineKeyboardButton, InlineKeyboardMarkup, Message, MessageId,
    ReplyMarkup,
};
use teloxide::utils::command::BotCommands;
use tracing::{error, info, warn};

use crate::keyboards::{self, Keyboard};
use crate::messages;
use crate::router::{self, Action, BackTarget, Render};
use crate::statsapi::StatsApi;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    /// Show the main menu.
    Start,
}

/// The dispatcher tree: /start plus button presses. Everything else the
/// transport delivers falls through unhandled.
pub fn build_handler_tree() -> UpdateHandler<teloxide::RequestError> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(Update::filter_callback_query().endpoint(handle_callback))
}

async fn handle_command(bot: Bot, msg: Message, cmd: Command) -> ResponseResult<()> {
    match cmd {
        Command::Start => {
            info!(chat_id = msg.chat.id.0, "Received /start command");
            let mut req = bot.send_message(msg.chat.id, messages::WELCOME_MESSAGE);
            req.reply_markup = Some(ReplyMarkup::InlineKeyboard(to_markup(
                keyboards::start_keyboard(),
            )));
            req.await?;
        }
    }
    Ok(())
}

async fn handle_callback(bot: Bot, query: CallbackQuery, api: StatsApi) -> ResponseResult<()> {
    let data = query.data.clone().unwrap_or_default();
    let action = Action::parse(&data);
    info!(data = %data, action = ?action, "Received callback query");

    let Some(message) = query.message.as_ref() else {
        warn!("Callback query without a message, nothing to edit");
        bot.answer_callback_query(&query.id).await?;
        return Ok(());
    };
    let chat_id = message.chat().id;
    let message_id = message.id();

    if action == Action::Unknown {
        // Outside the token grammar: acknowledge and change nothing.
        warn!(data = %data, "Ignoring unrecognized callback token");
        bot.answer_callback_query(&query.id).await?;
        return Ok(());
    }

    let screen = TelegramScreen {
        bot: bot.clone(),
        chat_id,
        message_id,
        callback_id: query.id.clone(),
    };

    if let Err(e) = router::dispatch(action, &api, &screen).await {
        error!(error = %e, data = %data, "Interaction failed");
        let mut req = bot.edit_message_text(chat_id, message_id, messages::FETCH_FAILED_MESSAGE);
        req.reply_markup = Some(to_markup(keyboards::back_keyboard(BackTarget::Start)));
        if let Err(e) = req.await {
            warn!(error = %e, "Failed to render apology message");
        }
        bot.answer_callback_query(&query.id).await?;
    }
    Ok(())
}

/// One displayed message being replaced in place.
struct TelegramScreen {
    bot: Bot,
    chat_id: ChatId,
    message_id: MessageId,
    callback_id: String,
}

#[async_trait]
impl Render for TelegramScreen {
    async fn render(&self, text: String, keyboard: Keyboard) -> Result<(), String> {
        let mut req = self.bot.edit_message_text(self.chat_id, self.message_id, text);
        req.reply_markup = Some(to_markup(keyboard));
        req.await.map_err(|e| format!("Failed to edit message: {}", e))?;
        self.bot
            .answer_callback_query(&self.callback_id)
            .await
            .map_err(|e| format!("Failed to answer callback query: {}", e))?;
        Ok(())
    }
}

fn to_markup(keyboard: Keyboard) -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = keyboard
        .rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|button| InlineKeyboardButton::callback(button.label, button.token))
                .collect()
        })
        .collect();
    InlineKeyboardMarkup::new(rows)
}
