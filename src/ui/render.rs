use ratatui::widgets::Clear;
use ratatui::Frame;

use crate::api::ReplyGenerator;
use crate::ui::app::App;
use crate::ui::composer::render_composer;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;

pub fn draw<G: ReplyGenerator>(frame: &mut Frame<'_>, app: &App<G>) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.endpoint()).widget(), header);
    frame.render_widget(Clear, body);
    render_composer(frame, body, app.state());
    frame.render_widget(Footer::new().widget(footer), footer);
}
